//! Password hashing and verification
//!
//! Argon2id with a per-hash random salt and tunable cost. Hashes are stored
//! as PHC strings, so the cost parameters used at hash time travel with the
//! hash and verification needs no extra configuration.

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use thiserror::Error;

use crate::config::HashParams;

/// Errors from the hashing primitive
#[derive(Debug, Error)]
pub enum HashError {
    /// Cost parameters outside the algorithm's accepted range
    #[error("invalid hash parameters: {0}")]
    Params(String),

    /// The hashing primitive itself failed
    #[error("password hashing failed: {0}")]
    Primitive(String),
}

/// Credential hasher with a fixed, tunable Argon2 cost
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    /// Create a hasher with the given cost parameters
    pub fn new(params: HashParams) -> Result<Self, HashError> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| HashError::Params(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password into a PHC string
    pub fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        self.argon2
            .hash_password(plaintext.as_bytes(), &salt()?)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError::Primitive(e.to_string()))
    }

    /// Verify a plaintext password against a stored PHC string.
    ///
    /// Returns `false` for a wrong password and for a malformed stored
    /// hash; callers cannot tell the two apart.
    pub fn verify(&self, stored: &str, plaintext: &str) -> bool {
        PasswordHash::new(stored)
            .map(|parsed| {
                self.argon2
                    .verify_password(plaintext.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHasher").finish_non_exhaustive()
    }
}

fn salt() -> Result<SaltString, HashError> {
    use rand::Rng;
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes[..]);
    SaltString::encode_b64(&bytes).map_err(|e| HashError::Primitive(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> CredentialHasher {
        CredentialHasher::new(HashParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("valid parameters")
    }

    #[test]
    fn test_hash_verify_roundtrip() {
        let hasher = fast_hasher();
        let hash = hasher.hash("secret1").unwrap();
        assert!(hasher.verify(&hash, "secret1"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hasher = fast_hasher();
        let hash = hasher.hash("secret1").unwrap();
        assert!(!hasher.verify(&hash, "secret2"));
        assert!(!hasher.verify(&hash, ""));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = fast_hasher();
        let one = hasher.hash("secret1").unwrap();
        let two = hasher.hash("secret1").unwrap();
        assert_ne!(one, two);
        assert!(hasher.verify(&one, "secret1"));
        assert!(hasher.verify(&two, "secret1"));
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let hasher = fast_hasher();
        let hash = hasher.hash("secret1").unwrap();
        assert_ne!(hash, "secret1");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        let hasher = fast_hasher();
        assert!(!hasher.verify("", "secret1"));
        assert!(!hasher.verify("not-a-phc-string", "secret1"));
        assert!(!hasher.verify("$argon2id$corrupted", "secret1"));
    }

    #[test]
    fn test_out_of_range_params_rejected() {
        let result = CredentialHasher::new(HashParams {
            memory_kib: 1024,
            iterations: 0,
            parallelism: 1,
        });
        assert!(matches!(result, Err(HashError::Params(_))));
    }
}
