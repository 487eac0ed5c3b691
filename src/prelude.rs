//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use eddy_amm::prelude::*;
//! ```
//!
//! The in-memory custody collaborators under [`crate::memory`] stay out of
//! the prelude on purpose: importing them explicitly marks the places where
//! a host ledger is being simulated.

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, AttachedValue, Shares, SwapFee, SwapKind, SwapOutcome, WithdrawOutcome,
};
pub use crate::state::Reserves;

// Re-export custody seams
pub use crate::traits::{AssetLedger, LedgerError, NativeVault, PayoutError};

// Re-export configuration
pub use crate::config::PoolConfig;

// Re-export the operation surface
pub use crate::controller::{PoolController, PoolSnapshot};
pub use crate::sync::SharedPool;

// Re-export events
pub use crate::events::{EventSink, InMemoryEventSink, NullSink, PoolEvent};

// Re-export error types
pub use crate::error::{PoolError, Result};
