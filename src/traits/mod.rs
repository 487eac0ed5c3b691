//! Collaborator seams consumed by the pool.
//!
//! The pool holds no asset custody of its own: the token side lives on an
//! external [`AssetLedger`] and the native-value side in a [`NativeVault`].
//! Both traits are implemented by the embedding environment; the crate ships
//! in-memory reference implementations in [`crate::memory`].

mod asset_ledger;
mod native_vault;

pub use asset_ledger::{AssetLedger, LedgerError};
pub use native_vault::{NativeVault, PayoutError};
