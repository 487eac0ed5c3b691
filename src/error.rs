//! Unified error types for the pool library.
//!
//! All fallible operations across the crate return [`PoolError`], so a
//! consumer matches on one taxonomy whether the failure came from pricing
//! math, share accounting, or an external collaborator.

use core::fmt;

use crate::traits::{LedgerError, PayoutError};

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Every failure the pool can surface.
///
/// Arithmetic variants carry a `&'static str` naming the operation that
/// failed; collaborator variants carry the collaborator's stated reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// A second initialization was attempted.
    AlreadyInitialized,
    /// An operation other than initialization ran before the pool was set up.
    PoolNotInitialized,
    /// A quantity that must be positive was zero.
    ZeroAmount(&'static str),
    /// Pricing was attempted against an empty reserve.
    ZeroReserve,
    /// A quoted output would drain the output reserve.
    InsufficientReserve,
    /// A provider tried to burn more shares than they hold.
    InsufficientShares,
    /// A swap produced less than the caller's stated minimum output.
    SlippageExceeded,
    /// The external asset ledger rejected a token transfer.
    AssetTransferFailed(&'static str),
    /// The native-value payout was rejected.
    PayoutFailed(&'static str),
    /// Checked addition or multiplication exceeded `u128`.
    Overflow(&'static str),
    /// Checked subtraction went below zero.
    Underflow(&'static str),
    /// A divisor was zero outside any guarded path.
    DivisionByZero,
    /// An internal invariant no longer holds. Not a normal error path; the
    /// pool's bookkeeping can no longer be trusted.
    StateCorrupted(&'static str),
    /// A configuration value failed validation.
    InvalidConfig(&'static str),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "pool is already initialized"),
            Self::PoolNotInitialized => write!(f, "pool is not initialized"),
            Self::ZeroAmount(what) => write!(f, "zero amount: {what}"),
            Self::ZeroReserve => write!(f, "pricing against an empty reserve"),
            Self::InsufficientReserve => {
                write!(f, "quoted output exceeds the available reserve")
            }
            Self::InsufficientShares => write!(f, "share balance is insufficient"),
            Self::SlippageExceeded => write!(f, "output fell below the stated minimum"),
            Self::AssetTransferFailed(reason) => {
                write!(f, "asset transfer failed: {reason}")
            }
            Self::PayoutFailed(reason) => write!(f, "value payout failed: {reason}"),
            Self::Overflow(what) => write!(f, "arithmetic overflow: {what}"),
            Self::Underflow(what) => write!(f, "arithmetic underflow: {what}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::StateCorrupted(what) => write!(f, "pool state corrupted: {what}"),
            Self::InvalidConfig(what) => write!(f, "invalid configuration: {what}"),
        }
    }
}

impl std::error::Error for PoolError {}

impl From<LedgerError> for PoolError {
    fn from(err: LedgerError) -> Self {
        Self::AssetTransferFailed(err.reason())
    }
}

impl From<PayoutError> for PoolError {
    fn from(err: PayoutError) -> Self {
        Self::PayoutFailed(err.reason())
    }
}
