//! Bearer token issuance and verification
//!
//! Stateless HS256 JWTs binding a username to an absolute expiry. Possession
//! of a correctly signed, unexpired token is the only session state; there
//! is no server-side session table.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::AuthConfig;

/// Token rejection reasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token structure could not be decoded
    #[error("malformed token")]
    Malformed,

    /// The signature does not match the configured secret
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token's expiry has passed
    #[error("token expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            _ => Self::Malformed,
        }
    }
}

/// Claims carried by an issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    fn new(subject: &str, ttl: Duration) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: subject.to_owned(),
            iat: now,
            exp: now + ttl.as_secs() as i64,
        }
    }

    /// Check if the token is expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Token service: issue and verify against a process-wide symmetric secret.
///
/// The secret is injected at construction and never rotated mid-process;
/// encoding and decoding keys are derived once.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a new token service from injected configuration
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is decided by the token alone, no clock slack
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(config.signing_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.signing_secret.as_bytes()),
            validation,
            ttl: config.token_ttl,
        }
    }

    /// Issue a signed token for the given username with the fixed TTL
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        let claims = Claims::new(username, self.ttl);
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::from)
    }

    /// Verify a presented token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("token rejected: {}", e);
                TokenError::from(e)
            })
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
