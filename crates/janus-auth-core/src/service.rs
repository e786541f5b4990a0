//! Auth workflow - ties together the credential hasher, token service, and
//! user directory

use std::sync::Arc;

use janus_db::{NewUser, UserRepository};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password::{CredentialHasher, HashError};
use crate::token::TokenService;

/// Authentication service
///
/// Orchestrates registration (validate, uniqueness, hash, persist) and login
/// (lookup, verify, issue) over an abstract user directory. Requests are
/// handled statelessly; the only shared state is the immutable configuration
/// behind `Arc`s.
pub struct AuthService<R: UserRepository> {
    users: Arc<R>,
    hasher: Arc<CredentialHasher>,
    tokens: TokenService,
}

impl<R: UserRepository> AuthService<R> {
    /// Create a new auth service
    pub fn new(config: AuthConfig, users: Arc<R>) -> Result<Self, HashError> {
        Ok(Self {
            hasher: Arc::new(CredentialHasher::new(config.hash_params)?),
            tokens: TokenService::new(&config),
            users,
        })
    }

    /// Token service handle, for gates that check token validity
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Register a new account.
    ///
    /// Every failure is terminal and leaves no partial state: nothing is
    /// written until the final insert, and the insert re-checks uniqueness
    /// atomically at the directory boundary.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidRequest);
        }

        // Fast path: refuse obvious duplicates before paying the hash cost.
        if self.users.exists(username).await? {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = self.hash_blocking(password.to_owned()).await?;

        let inserted = self
            .users
            .insert_if_absent(NewUser {
                username: username.to_owned(),
                password_hash,
            })
            .await?;
        if !inserted {
            // Lost a race against a concurrent registration of the same name.
            return Err(AuthError::UserAlreadyExists);
        }

        tracing::info!(username, "user registered");
        Ok(())
    }

    /// Log in with username and password, returning a bearer token.
    ///
    /// An unknown username and a wrong password are reported identically so
    /// responses never reveal whether an account exists. Neither is a system
    /// fault; both log at debug only.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = match self.users.find_by_username(username).await? {
            Some(user) => user,
            None => {
                tracing::debug!(username, "login for unknown user");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let verified = self
            .verify_blocking(user.password_hash, password.to_owned())
            .await?;
        if !verified {
            tracing::debug!(username, "login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        self.tokens
            .issue(&user.username)
            .map_err(|e| AuthError::Internal(format!("token issuance failed: {e}")))
    }

    /// Run the Argon2 hash on the blocking pool; one slow hash must not
    /// stall unrelated requests on the async workers.
    async fn hash_blocking(&self, password: String) -> Result<String, AuthError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("hashing task failed: {e}")))?
            .map_err(AuthError::from)
    }

    async fn verify_blocking(&self, stored: String, password: String) -> Result<bool, AuthError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&stored, &password))
            .await
            .map_err(|e| AuthError::Internal(format!("verification task failed: {e}")))
    }
}

impl<R: UserRepository> std::fmt::Debug for AuthService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}
