//! Measured reserve snapshots.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Shares};
use crate::error::PoolError;

/// A snapshot of the two reserves at one instant.
///
/// `Reserves` is a measurement, not stored state: the controller assembles
/// it from the live vault balance and the live ledger balance of the pool
/// account, adjusted for any attached payment that already landed. Pricing
/// and redemption math consume the snapshot so that every number in one
/// operation refers to the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Reserves {
    value: Amount,
    token: Amount,
}

impl Reserves {
    /// Builds a snapshot from measured balances.
    pub const fn new(value: Amount, token: Amount) -> Self {
        Self { value, token }
    }

    /// Native-value reserve.
    #[must_use]
    pub const fn value(&self) -> Amount {
        self.value
    }

    /// Token reserve.
    #[must_use]
    pub const fn token(&self) -> Amount {
        self.token
    }

    /// Returns `true` if either side is empty.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.value.is_zero() || self.token.is_zero()
    }

    /// The constant-product invariant value `value · token`.
    ///
    /// Returns `None` if the product exceeds `u128`; tests and invariant
    /// checks treat that as "too deep to verify", never as zero.
    #[must_use]
    pub const fn checked_product(&self) -> Option<u128> {
        self.value.get().checked_mul(self.token.get())
    }

    /// Defensive non-degeneracy check.
    ///
    /// A pool with outstanding shares must hold both assets; an empty side
    /// under a positive supply means bookkeeping and custody have diverged.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::StateCorrupted`] if `total_shares > 0` while
    /// either reserve is zero.
    pub const fn require_backing(&self, total_shares: Shares) -> crate::error::Result<()> {
        if !total_shares.is_zero() && self.is_degenerate() {
            return Err(PoolError::StateCorrupted(
                "outstanding shares with an empty reserve",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reserves(value={}, token={})", self.value, self.token)
    }
}
