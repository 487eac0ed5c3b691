//! Seam to the environment's native-value custody.
//!
//! The native value asset is not an [`AssetLedger`](super::AssetLedger)
//! token: the environment delivers it atomically with each call (an attached
//! payment already sits in custody when the pool runs) and exposes a payout
//! primitive that can fail. [`NativeVault`] models exactly those two
//! capabilities. The pool's value reserve is [`balance`](NativeVault::balance),
//! never a stored number.

use core::fmt;

use crate::domain::{AccountId, Amount};

/// Native-value custody held for the pool by the execution environment.
///
/// # Contract
///
/// - [`balance`](Self::balance) reports the pool's current native holdings,
///   including any payment attached to the in-flight call. The "reserve
///   before this call" is therefore `balance() - attached`, computed by the
///   pool, never re-queried after the fact.
/// - A [`pay_out`](Self::pay_out) returning `Err` must leave custody
///   unchanged. A settled payout is final: the pool cannot recall it.
pub trait NativeVault {
    /// The pool's current native-value holdings.
    #[must_use]
    fn balance(&self) -> Amount;

    /// Sends `amount` of native value from pool custody to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PayoutError`] if the recipient rejects the payment or the
    /// environment refuses it; custody is unchanged in that case.
    fn pay_out(&mut self, to: &AccountId, amount: Amount) -> Result<(), PayoutError>;
}

/// Failure reported by a [`NativeVault`] payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutError {
    reason: &'static str,
}

impl PayoutError {
    /// Creates a payout failure with the environment's stated reason.
    #[must_use]
    pub const fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// The environment's stated reason.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        self.reason
    }
}

impl fmt::Display for PayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payout rejected: {}", self.reason)
    }
}

impl std::error::Error for PayoutError {}
