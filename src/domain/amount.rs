//! Raw asset amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A raw asset quantity in the smallest unit of either pool asset.
///
/// `Amount` is unit-blind: the same type carries native-value quantities and
/// token quantities, and the pool never mixes the two in one expression except
/// through [`mul_div_floor`](Self::mul_div_floor). All `u128` values are valid
/// amounts; negatives are unrepresentable.
///
/// Arithmetic methods are checked: they return `None` on overflow, underflow,
/// or division by zero instead of panicking. Division is always floor
/// division; every rounding decision in the pool rounds in the pool's favor,
/// so no ceiling variant exists.
///
/// # Examples
///
/// ```
/// use eddy_amm::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked floor division. Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self) -> Option<Self> {
        match self.0.checked_div(divisor.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `self * multiplier / divisor` with floor division.
    ///
    /// This is the single muldiv primitive behind all pricing and share
    /// math. The truncated remainder stays with the pool, never with the
    /// party initiating the operation.
    ///
    /// Returns `None` if the intermediate product overflows `u128` or if
    /// `divisor` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use eddy_amm::domain::Amount;
    ///
    /// let contributed = Amount::new(550);
    /// let reserve = Amount::new(910);
    /// let prior = Amount::new(1_100);
    /// assert_eq!(
    ///     contributed.mul_div_floor(&reserve, &prior),
    ///     Some(Amount::new(455))
    /// );
    /// ```
    #[must_use]
    pub const fn mul_div_floor(&self, multiplier: &Self, divisor: &Self) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        match self.0.checked_mul(multiplier.0) {
            Some(product) => Some(Self(product / divisor.0)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
