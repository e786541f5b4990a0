//! Configuration types for the auth core

use std::time::Duration;

/// Argon2 cost parameters for the credential hasher
#[derive(Debug, Clone, Copy)]
pub struct HashParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes over the memory
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        // Argon2id defaults from RFC 9106's second recommended profile
        Self {
            memory_kib: 19 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Auth service configuration
///
/// The signing secret is injected here once at startup and handed to the
/// token service at construction; nothing in the core reads ambient
/// process state.
#[derive(Clone)]
pub struct AuthConfig {
    /// Symmetric secret for token signing
    pub signing_secret: String,
    /// Uniform lifetime applied to every issued token
    pub token_ttl: Duration,
    /// Credential hasher cost
    pub hash_params: HashParams,
}

impl AuthConfig {
    /// Minimum accepted signing secret length in bytes (256 bits)
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Default token lifetime
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

    /// Create a new auth config with default TTL and hash cost
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: signing_secret.into(),
            token_ttl: Self::DEFAULT_TOKEN_TTL,
            hash_params: HashParams::default(),
        }
    }

    /// Set the token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Set the credential hasher cost
    pub fn with_hash_params(mut self, params: HashParams) -> Self {
        self.hash_params = params;
        self
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret_length", &self.signing_secret.len())
            .field("token_ttl", &self.token_ttl)
            .field("hash_params", &self.hash_params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::new("secret");
        assert_eq!(config.token_ttl, Duration::from_secs(3600));
        assert_eq!(config.hash_params.memory_kib, 19 * 1024);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AuthConfig::new("secret")
            .with_token_ttl(Duration::from_secs(120))
            .with_hash_params(HashParams {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            });
        assert_eq!(config.token_ttl, Duration::from_secs(120));
        assert_eq!(config.hash_params.iterations, 1);
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = AuthConfig::new("very-secret-value");
        let printed = format!("{config:?}");
        assert!(!printed.contains("very-secret-value"));
    }
}
