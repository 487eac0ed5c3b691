//! Liquidity share units.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;

/// Outstanding liquidity shares, the fungible claim on both pool reserves.
///
/// Distinct from [`Amount`] because shares measure a proportional claim, not
/// a quantity of either asset. The only bridge between the two units is the
/// genesis rule (one share per unit of value at initialization, see
/// [`from_amount`](Self::from_amount)) and the floor-division ratio helpers
/// below.
///
/// # Examples
///
/// ```
/// use eddy_amm::domain::Shares;
///
/// let a = Shares::new(1_000);
/// let b = Shares::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Shares::new(3_000)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Genesis conversion: one share per smallest unit of value asset.
    pub const fn from_amount(amount: Amount) -> Self {
        Self(amount.get())
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the share count is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Scales this share count by the ratio `numerator / divisor` with floor
    /// division.
    ///
    /// Used for minting: `total_shares.scaled_floor(&contributed, &prior)`
    /// is the share count matching a value contribution. Returns `None` on
    /// intermediate overflow or a zero divisor.
    #[must_use]
    pub const fn scaled_floor(&self, numerator: &Amount, divisor: &Amount) -> Option<Self> {
        if divisor.is_zero() {
            return None;
        }
        match self.0.checked_mul(numerator.get()) {
            Some(product) => Some(Self(product / divisor.get())),
            None => None,
        }
    }

    /// Computes this share count's floor share of a reserve:
    /// `self * reserve / total_shares`.
    ///
    /// Used for redemption. Returns `None` on intermediate overflow or a
    /// zero `total_shares`.
    #[must_use]
    pub const fn proportional_amount(
        &self,
        reserve: &Amount,
        total_shares: &Self,
    ) -> Option<Amount> {
        if total_shares.is_zero() {
            return None;
        }
        match self.0.checked_mul(reserve.get()) {
            Some(product) => Some(Amount::new(product / total_shares.0)),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
