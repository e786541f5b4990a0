//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// User row from the database
///
/// The username is the primary key; `password_hash` is an opaque PHC string
/// and must never appear in logs or responses.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
