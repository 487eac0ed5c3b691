//! Fundamental domain value types used throughout the pool library.
//!
//! This module contains the value types that model the pool domain:
//! amounts, shares, account identities, fees, and operation outcomes.
//! All types are newtypes with validated constructors where an invariant
//! exists, and checked arithmetic everywhere.

mod account_id;
mod amount;
mod attached_value;
mod fee;
mod shares;
mod swap_outcome;
mod withdraw_outcome;

pub use account_id::AccountId;
pub use amount::Amount;
pub use attached_value::AttachedValue;
pub use fee::SwapFee;
pub use shares::Shares;
pub use swap_outcome::{SwapKind, SwapOutcome};
pub use withdraw_outcome::WithdrawOutcome;
