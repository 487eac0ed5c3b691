//! Pool bookkeeping: stored supply state, measured reserve snapshots, and
//! the per-provider share ledger.
//!
//! The split mirrors what is actually authoritative where: [`PoolState`]
//! stores the only numbers the pool owns (share supply, init flag),
//! [`Reserves`] carries point-in-time measurements of collaborator-held
//! balances, and [`LiquidityLedger`] maps providers to their claims.

mod ledger;
mod pool;
mod reserves;

pub use ledger::{BurnAllocation, LiquidityLedger, MintAllocation};
pub use pool::PoolState;
pub use reserves::Reserves;
