use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HashError;
use crate::hasher::hash_bytes;

/// Deterministic 64-bit content fingerprint, computed as XXH64 (seed 0)
/// of a byte buffer.
///
/// A fingerprint has no identity beyond its value: equal bytes produce
/// equal fingerprints everywhere, so it can be stored and compared as a
/// cheap proxy for the content itself.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// Fingerprint the given byte buffer.
    pub fn of(data: &[u8]) -> Self {
        Self(hash_bytes(data))
    }

    pub fn as_bytes(&self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(bytes))
    }

    /// Parse the 16-hex-char display form back into a fingerprint.
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        if hex.len() != 16 {
            return Err(HashError::InvalidInput {
                reason: format!("expected 16 hex chars, got {}", hex.len()),
            });
        }
        // from_str_radix tolerates a leading `+`; only hex digits round-trip.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HashError::InvalidInput {
                reason: format!("invalid fingerprint hex: {hex:?}"),
            });
        }
        u64::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|e| HashError::InvalidInput {
                reason: format!("invalid fingerprint hex: {e}"),
            })
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({:016x})", self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_matches_hash_bytes() {
        let data = b"abc";
        assert_eq!(Fingerprint::of(data).0, hash_bytes(data));
    }

    #[test]
    fn display_is_16_hex_chars() {
        let fp = Fingerprint(0x44bc_2cf5_ad77_0999);
        assert_eq!(fp.to_string(), "44bc2cf5ad770999");
        assert_eq!(Fingerprint(7).to_string(), "0000000000000007");
    }

    #[test]
    fn hex_round_trip() {
        let fp = Fingerprint::of(b"hello world");
        assert_eq!(Fingerprint::from_hex(&fp.to_string()).unwrap(), fp);
    }

    #[test]
    fn bytes_round_trip() {
        let fp = Fingerprint::of(b"hello world");
        assert_eq!(Fingerprint::from_bytes(fp.as_bytes()), fp);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let err = Fingerprint::from_hex("abc").unwrap_err();
        match err {
            HashError::InvalidInput { reason } => {
                assert!(reason.contains("16 hex chars"));
            }
        }
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        let err = Fingerprint::from_hex("zzzzzzzzzzzzzzzz").unwrap_err();
        assert!(!err.is_retryable());
    }

    #[test]
    fn from_hex_rejects_sign_prefix() {
        // 16 chars, parseable by from_str_radix, but not the display form.
        assert!(Fingerprint::from_hex("+fffffffffffffff").is_err());
        assert!(Fingerprint::from_hex("+000000000000007").is_err());
    }

    #[test]
    fn serde_round_trip() {
        let fp = Fingerprint::of(b"abc");
        let json = serde_json::to_string(&fp).unwrap();
        let back: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fp);
    }
}
