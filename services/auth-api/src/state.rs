//! Application state

use std::ops::Deref;
use std::sync::Arc;

use janus_auth_core::AuthService;
use janus_db::{DbPool, PgUserRepository};

/// Type alias for the auth service with the concrete repository type
pub type AuthServiceImpl = AuthService<PgUserRepository>;

/// Shared database pool wrapper for health checks
#[derive(Clone)]
pub struct SharedPool(Arc<DbPool>);

impl Deref for SharedPool {
    type Target = DbPool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth service for registration, login, and token checks
    pub auth: Arc<AuthServiceImpl>,
    /// Database connection pool (shared reference for health checks)
    pub pool: SharedPool,
}

impl AppState {
    /// Create new application state
    pub fn new(auth: AuthServiceImpl, pool: DbPool) -> Self {
        Self {
            auth: Arc::new(auth),
            pool: SharedPool(Arc::new(pool)),
        }
    }
}
