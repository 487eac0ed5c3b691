//! Stored pool bookkeeping.

use core::fmt;

use crate::domain::Shares;
use crate::error::PoolError;

/// The only state the pool stores: total share supply and the one-shot
/// initialization flag.
///
/// Reserves are deliberately absent. Both reserve balances are derived live
/// from the collaborators (vault balance, ledger balance of the pool
/// account), so they cannot drift from the assets actually held.
///
/// `initialized` transitions false to true exactly once;
/// [`revert_initialize`](Self::revert_initialize) exists only for the
/// rollback path of a failed genesis (the token pull rejected after the
/// flag was set).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PoolState {
    total_shares: Shares,
    initialized: bool,
}

impl PoolState {
    /// Fresh, uninitialized pool bookkeeping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_shares: Shares::ZERO,
            initialized: false,
        }
    }

    /// Returns `true` once the pool has been initialized.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the outstanding share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Guard used by every post-genesis operation.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::PoolNotInitialized`] before genesis.
    pub const fn require_initialized(&self) -> crate::error::Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(PoolError::PoolNotInitialized)
        }
    }

    /// Marks the pool initialized with its genesis share supply.
    ///
    /// # Errors
    ///
    /// - [`PoolError::AlreadyInitialized`] on a second call.
    /// - [`PoolError::ZeroAmount`] if `genesis` is zero; a pool with no
    ///   outstanding shares must stay uninitialized.
    pub fn initialize(&mut self, genesis: Shares) -> crate::error::Result<()> {
        if self.initialized {
            return Err(PoolError::AlreadyInitialized);
        }
        if genesis.is_zero() {
            return Err(PoolError::ZeroAmount("genesis share supply"));
        }
        self.total_shares = genesis;
        self.initialized = true;
        Ok(())
    }

    /// Rolls a failed genesis back to the uninitialized state.
    pub(crate) fn revert_initialize(&mut self) {
        self.total_shares = Shares::ZERO;
        self.initialized = false;
    }

    /// Grows the share supply by a mint.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the supply would exceed `u128`.
    pub fn add_shares(&mut self, minted: Shares) -> crate::error::Result<()> {
        self.total_shares = self
            .total_shares
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("share supply growth"))?;
        Ok(())
    }

    /// Shrinks the share supply by a burn.
    ///
    /// The controller debits the provider's position first, so a burn
    /// exceeding the supply means positions and supply have diverged.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::StateCorrupted`] if `burned` exceeds the supply.
    pub fn remove_shares(&mut self, burned: Shares) -> crate::error::Result<()> {
        self.total_shares = self
            .total_shares
            .checked_sub(&burned)
            .ok_or(PoolError::StateCorrupted("share supply underflow"))?;
        Ok(())
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolState(shares={}, initialized={})",
            self.total_shares, self.initialized
        )
    }
}
