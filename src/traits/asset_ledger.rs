//! Seam to the external fungible-token ledger.
//!
//! The pool never persists token balances itself. Token custody lives on an
//! external ledger keyed by [`AccountId`]; the pool's token reserve is simply
//! the ledger balance of the pool account, queried live. [`AssetLedger`] is
//! consumed by the pool, implemented by the embedding environment (or by
//! [`InMemoryAssetLedger`](crate::memory::InMemoryAssetLedger) in tests).

use core::fmt;

use crate::domain::{AccountId, Amount};

/// External fungible-token ledger consumed by the pool.
///
/// # Contract
///
/// - A call returning `Err` must leave the ledger unchanged. The pool's
///   rollback logic relies on failed transfers having no effect.
/// - [`transfer_from`](Self::transfer_from) requires prior authorization by
///   `from` (an allowance in ERC-20 terms); the pool holds no such
///   authority implicitly.
/// - [`transfer`](Self::transfer) moves funds out of pool custody and is
///   only invoked by the pool for its own account.
///
/// # Errors
///
/// Implementations report failures through [`LedgerError`]; the pool maps
/// every variant onto
/// [`PoolError::AssetTransferFailed`](crate::error::PoolError::AssetTransferFailed).
pub trait AssetLedger {
    /// Returns the token balance of `holder`. Unknown holders read as zero.
    #[must_use]
    fn balance_of(&self, holder: &AccountId) -> Amount;

    /// Moves `amount` from `from` to `to` against a prior authorization.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    /// - [`LedgerError::InsufficientAllowance`] if `to` (the spender) was
    ///   not authorized for `amount`.
    /// - [`LedgerError::Rejected`] for any other ledger-side refusal.
    fn transfer_from(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Pushes `amount` from pool custody to `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if pool custody holds less
    ///   than `amount`.
    /// - [`LedgerError::Rejected`] for any other ledger-side refusal.
    fn transfer(&mut self, to: &AccountId, amount: Amount) -> Result<(), LedgerError>;
}

/// Failure reported by an [`AssetLedger`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// The source account holds less than the requested amount.
    InsufficientBalance,
    /// The spender is not authorized for the requested amount.
    InsufficientAllowance,
    /// Any other ledger-side refusal, with the ledger's stated reason.
    Rejected(&'static str),
}

impl LedgerError {
    /// Short human-readable reason, used when mapping into the pool's error
    /// taxonomy.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InsufficientBalance => "insufficient balance",
            Self::InsufficientAllowance => "insufficient allowance",
            Self::Rejected(reason) => reason,
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ledger refused transfer: {}", self.reason())
    }
}

impl std::error::Error for LedgerError {}
