//! Auth errors

use thiserror::Error;

use crate::password::HashError;

/// Authentication workflow errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Empty username or password in the request
    #[error("invalid request")]
    InvalidRequest,

    /// Registration for a username that is already taken
    #[error("user already exist")]
    UserAlreadyExists,

    /// Unknown username or wrong password; the two are deliberately
    /// indistinguishable to callers
    #[error("wrong username or password")]
    InvalidCredentials,

    /// Password hashing failed
    #[error("password hashing error: {0}")]
    Hashing(String),

    /// User directory failure
    #[error("user directory error: {0}")]
    Storage(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<janus_db::DbError> for AuthError {
    fn from(err: janus_db::DbError) -> Self {
        tracing::error!("user directory error: {}", err);
        Self::Storage(err.to_string())
    }
}

impl From<HashError> for AuthError {
    fn from(err: HashError) -> Self {
        Self::Hashing(err.to_string())
    }
}
