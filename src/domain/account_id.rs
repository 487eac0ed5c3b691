//! Environment-agnostic account identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identity of a party known to the execution environment: a trader,
/// a liquidity provider, or the pool itself.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are valid
/// identities, so construction is infallible. The pool never interprets the
/// bytes; it only compares them and hands them to the collaborator traits.
///
/// # Examples
///
/// ```
/// use eddy_amm::domain::AccountId;
///
/// let id = AccountId::from_bytes([1u8; 32]);
/// assert_eq!(id.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero identity.
    ///
    /// Useful as a sentinel or placeholder value; use sparingly.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }
}

impl fmt::Display for AccountId {
    /// Lowercase hex rendering of the full 32 bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [42u8; 32];
        let id = AccountId::from_bytes(bytes);
        assert_eq!(id.as_bytes(), bytes);
    }

    #[test]
    fn zero_is_all_zeros() {
        let id = AccountId::zero();
        assert_eq!(id.as_bytes(), [0u8; 32]);
    }

    #[test]
    fn equality_same_bytes() {
        let a = AccountId::from_bytes([1u8; 32]);
        let b = AccountId::from_bytes([1u8; 32]);
        assert_eq!(a, b);
    }

    #[test]
    fn inequality_different_bytes() {
        let a = AccountId::from_bytes([1u8; 32]);
        let b = AccountId::from_bytes([2u8; 32]);
        assert_ne!(a, b);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let lo = AccountId::from_bytes([0u8; 32]);
        let hi = AccountId::from_bytes([1u8; 32]);
        assert!(lo < hi);
    }

    #[test]
    fn copy_semantics() {
        let a = AccountId::from_bytes([5u8; 32]);
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn display_is_hex() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        let rendered = format!("{}", AccountId::from_bytes(bytes));
        assert_eq!(rendered.len(), 64);
        assert!(rendered.starts_with("ab"));
        assert!(rendered.ends_with("01"));
    }

    #[test]
    fn debug_format() {
        let id = AccountId::zero();
        let dbg = format!("{id:?}");
        assert!(dbg.contains("AccountId"));
    }
}
