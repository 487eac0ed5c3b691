//! Outcome of a settled swap.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::PoolError;

/// Direction of a swap between the two pool assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapKind {
    /// Native value paid in, tokens paid out.
    ValueForToken,
    /// Tokens paid in, native value paid out.
    TokenForValue,
}

impl SwapKind {
    /// Stable lowercase label, used in event payloads and logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ValueForToken => "value_for_token",
            Self::TokenForValue => "token_for_value",
        }
    }
}

impl fmt::Display for SwapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A settled swap: direction and the two amounts that actually moved.
///
/// The fee is not reported separately; it never leaves the pool, it is the
/// part of `amount_in` that the quote formula excluded from pricing.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`: zero-leg swaps are rejected
///   before settlement.
///
/// # Examples
///
/// ```
/// use eddy_amm::domain::{Amount, SwapKind, SwapOutcome};
///
/// let outcome = SwapOutcome::new(
///     SwapKind::ValueForToken,
///     Amount::new(100),
///     Amount::new(90),
/// );
/// assert!(outcome.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapOutcome {
    kind: SwapKind,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapOutcome {
    /// Creates a `SwapOutcome` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAmount`] if either amount is zero.
    pub const fn new(
        kind: SwapKind,
        amount_in: Amount,
        amount_out: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount("swap outcome input"));
        }
        if amount_out.is_zero() {
            return Err(PoolError::ZeroAmount("swap outcome output"));
        }
        Ok(Self {
            kind,
            amount_in,
            amount_out,
        })
    }

    /// Returns the swap direction.
    pub const fn kind(&self) -> SwapKind {
        self.kind
    }

    /// Returns the amount paid in.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount paid out.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapOutcome({}, in={}, out={})",
            self.kind, self.amount_in, self.amount_out
        )
    }
}
