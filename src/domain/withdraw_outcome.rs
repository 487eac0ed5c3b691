//! Outcome of a settled withdrawal.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Shares};
use crate::error::PoolError;

/// A settled withdrawal: shares burned and the two amounts redeemed.
///
/// Either redemption amount may be zero for a dust-sized burn; the floor
/// rounding policy drops sub-unit remainders in the pool's favor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WithdrawOutcome {
    shares_burned: Shares,
    value_out: Amount,
    token_out: Amount,
}

impl WithdrawOutcome {
    /// Creates a `WithdrawOutcome`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAmount`] if `shares_burned` is zero.
    pub const fn new(
        shares_burned: Shares,
        value_out: Amount,
        token_out: Amount,
    ) -> crate::error::Result<Self> {
        if shares_burned.is_zero() {
            return Err(PoolError::ZeroAmount("withdrawal share amount"));
        }
        Ok(Self {
            shares_burned,
            value_out,
            token_out,
        })
    }

    /// Returns the number of shares burned.
    pub const fn shares_burned(&self) -> Shares {
        self.shares_burned
    }

    /// Returns the native value redeemed.
    pub const fn value_out(&self) -> Amount {
        self.value_out
    }

    /// Returns the tokens redeemed.
    pub const fn token_out(&self) -> Amount {
        self.token_out
    }
}

impl fmt::Display for WithdrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WithdrawOutcome(shares={}, value={}, token={})",
            self.shares_burned, self.value_out, self.token_out
        )
    }
}
