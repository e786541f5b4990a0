//! Configuration for the Auth API service.

use std::time::Duration;

use janus_auth_core::AuthConfig;

/// Auth API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Database URL
    pub database_url: String,

    /// Auth core configuration
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Database
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        // Server port
        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // Signing secret (minimum 32 bytes)
        let signing_secret = std::env::var("JANUS_SIGNING_SECRET")
            .map_err(|_| ConfigError::Missing("JANUS_SIGNING_SECRET"))?;

        if signing_secret.len() < AuthConfig::MIN_SECRET_LENGTH {
            return Err(ConfigError::Invalid(
                "JANUS_SIGNING_SECRET must be at least 32 characters",
            ));
        }

        // Token lifetime (default 1 hour)
        let token_ttl_secs: u64 = std::env::var("JANUS_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("JANUS_TOKEN_TTL_SECS"))?;

        let auth =
            AuthConfig::new(signing_secret).with_token_ttl(Duration::from_secs(token_ttl_secs));

        Ok(Self {
            http_port,
            database_url,
            auth,
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
