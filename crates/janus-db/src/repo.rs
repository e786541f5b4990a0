//! Repository traits
//!
//! Define async repository interfaces for the user directory.

use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::UserRow;

/// User directory trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether a username is already taken
    async fn exists(&self, username: &str) -> DbResult<bool>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> DbResult<Option<UserRow>>;

    /// Insert a new user unless the username is already taken.
    ///
    /// Returns `true` if the row was written, `false` if a record with the
    /// same username already existed. This is the atomic variant of
    /// check-then-insert: concurrent registrations of the same username
    /// resolve here, with exactly one caller seeing `true`.
    async fn insert_if_absent(&self, user: NewUser) -> DbResult<bool>;
}

/// Create user input
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
