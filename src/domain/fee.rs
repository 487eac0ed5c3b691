//! Swap fee expressed as a retained-input fraction.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PoolError;

/// The fraction of a swap input that participates in pricing.
///
/// A fee of 0.3% is represented as `997/1000`: for every 1000 units paid in,
/// 997 units price the trade and the remaining 3 stay in the pool as the
/// provider fee. Keeping the fraction in integer form lets the quote formula
/// run without intermediate rounding.
///
/// # Examples
///
/// ```
/// use eddy_amm::domain::SwapFee;
///
/// let fee = SwapFee::STANDARD;
/// assert_eq!(fee.numerator(), 997);
/// assert_eq!(fee.denominator(), 1000);
/// assert_eq!(fee.fee_basis_points(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct SwapFee {
    numerator: u32,
    denominator: u32,
}

impl SwapFee {
    /// The conventional 0.3% fee: 997 parts in 1000 price the trade.
    pub const STANDARD: Self = Self {
        numerator: 997,
        denominator: 1000,
    };

    /// Fee-free pricing. Swaps keep the reserve product exactly constant
    /// up to floor rounding.
    pub const FREE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a fee from a retained-input fraction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the denominator is zero, the
    /// numerator is zero (the fee would consume the entire input), or the
    /// numerator exceeds the denominator (a negative fee).
    pub const fn new(numerator: u32, denominator: u32) -> crate::error::Result<Self> {
        if denominator == 0 {
            return Err(PoolError::InvalidConfig("fee denominator is zero"));
        }
        if numerator == 0 {
            return Err(PoolError::InvalidConfig("fee consumes the entire input"));
        }
        if numerator > denominator {
            return Err(PoolError::InvalidConfig(
                "fee numerator exceeds denominator",
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Retained-input numerator.
    #[must_use]
    pub const fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Retained-input denominator.
    #[must_use]
    pub const fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.numerator == self.denominator
    }

    /// The fee expressed in basis points, rounded down.
    ///
    /// `997/1000` is 30 bp.
    #[must_use]
    pub const fn fee_basis_points(&self) -> u32 {
        let kept = self.numerator as u64;
        let total = self.denominator as u64;
        (((total - kept) * 10_000) / total) as u32
    }

    /// The fee as a floating-point percentage, for display only.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        let kept = f64::from(self.numerator);
        let total = f64::from(self.denominator);
        (1.0 - kept / total) * 100.0
    }
}

impl Default for SwapFee {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for SwapFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
