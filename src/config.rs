//! Pool configuration.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::SwapFee;

/// Immutable parameters fixed when a pool controller is created.
///
/// Validation happens at the edges: a [`SwapFee`] can only be constructed
/// valid, so holding one is proof the configuration is sound.
///
/// # Examples
///
/// ```
/// use eddy_amm::config::PoolConfig;
///
/// let config = PoolConfig::default();
/// assert_eq!(config.fee().fee_basis_points(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[must_use]
pub struct PoolConfig {
    fee: SwapFee,
}

impl PoolConfig {
    /// Configuration with an explicit fee.
    pub const fn new(fee: SwapFee) -> Self {
        Self { fee }
    }

    /// Configuration from raw fee parts.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`](crate::error::PoolError::InvalidConfig)
    /// if the parts do not form a valid retained-input fraction.
    pub const fn with_fee_parts(numerator: u32, denominator: u32) -> crate::error::Result<Self> {
        match SwapFee::new(numerator, denominator) {
            Ok(fee) => Ok(Self { fee }),
            Err(err) => Err(err),
        }
    }

    /// The swap fee applied to every trade.
    #[must_use]
    pub const fn fee(&self) -> SwapFee {
        self.fee
    }
}

impl fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoolConfig(fee={})", self.fee)
    }
}
