//! Cryptographic key types for party identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::TypesError;

/// A 32-byte Ed25519 public key.
///
/// A party's owning key is the key whose signature a contract demands when
/// that party participates in a state.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub [u8; 32]);

/// A 32-byte Ed25519 private key (secret scalar).
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Key bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(pub [u8; 32]);

/// An Ed25519 key pair (public + private).
///
/// Use `iou_crypto::keypair_from_seed()` to construct key pairs.
/// This struct is intentionally just data.
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl PublicKey {
    /// Parse a key from its 64-character hex form.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let bytes = hex::decode(s).map_err(|e| TypesError::InvalidKey(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| TypesError::InvalidKey(format!("expected 32 bytes, got {}", b.len())))?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let key = PublicKey([7u8; 32]);
        let parsed = PublicKey::from_hex(&key.to_string()).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let result = PublicKey::from_hex("abcd");
        assert!(matches!(result, Err(TypesError::InvalidKey(_))));
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        let result = PublicKey::from_hex(&"zz".repeat(32));
        assert!(matches!(result, Err(TypesError::InvalidKey(_))));
    }

    #[test]
    fn debug_shows_short_prefix() {
        let key = PublicKey([0xab; 32]);
        assert_eq!(format!("{:?}", key), "PublicKey(abababab)");
    }
}
