//! Native value attached to a call.

use core::fmt;

use super::Amount;

/// Native value delivered atomically with a pool operation.
///
/// By the time the pool runs, this amount already sits in vault custody: the
/// environment credits it before handing over control, and the receipt
/// cannot be reversed. Wrapping the amount in its own type keeps "money that
/// already arrived" from being confused with amounts the pool still has to
/// move, and the pre-call value reserve is always derived as
/// `vault.balance() - attached`.
///
/// # Examples
///
/// ```
/// use eddy_amm::domain::{Amount, AttachedValue};
///
/// let attached = AttachedValue::new(Amount::new(100));
/// assert_eq!(attached.amount(), Amount::new(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct AttachedValue(Amount);

impl AttachedValue {
    /// Wraps an already-received amount.
    pub const fn new(amount: Amount) -> Self {
        Self(amount)
    }

    /// Returns the attached amount.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.0
    }

    /// Returns the raw `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0.get()
    }

    /// Returns `true` if no value was attached.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for AttachedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
