//! Salted SHA-256 password hashing for the local provider.

use super::PasswordHasher;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// SHA-256 password hasher with constant-time verification.
///
/// The digest covers `salt || password`. Verification compares digests with
/// `subtle::ConstantTimeEq`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    /// Create a new SHA-256 hasher.
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, password: &str, salt: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        hasher.finalize().into()
    }

    fn verify(&self, password: &str, salt: &[u8], hash: &[u8; 32]) -> bool {
        self.hash(password, salt).ct_eq(hash).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::decode_hex;

    #[test]
    fn test_verify_round_trip() {
        let hasher = Sha256Hasher::new();
        let salt = [7u8; 16];
        let hash = hasher.hash("hunter2", &salt);

        assert!(hasher.verify("hunter2", &salt, &hash));
        assert!(!hasher.verify("hunter3", &salt, &hash));
        assert!(!hasher.verify("Hunter2", &salt, &hash));
    }

    #[test]
    fn test_salt_changes_hash() {
        let hasher = Sha256Hasher::new();
        let a = hasher.hash("hunter2", &[1u8; 16]);
        let b = hasher.hash("hunter2", &[2u8; 16]);

        assert_ne!(a, b);
        assert!(!hasher.verify("hunter2", &[2u8; 16], &a));
    }

    #[test]
    fn test_known_vector() {
        // sha256("abc") with an empty salt
        let expected = decode_hex::<32>(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        )
        .unwrap();
        assert_eq!(Sha256Hasher::new().hash("abc", &[]), expected);
    }

    #[test]
    fn test_unicode_password() {
        let hasher = Sha256Hasher::default();
        let salt = [3u8; 16];
        let hash = hasher.hash("contraseña🔒", &salt);
        assert!(hasher.verify("contraseña🔒", &salt, &hash));
    }
}
