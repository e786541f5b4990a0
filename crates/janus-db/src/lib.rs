//! Janus DB - User directory abstractions
//!
//! SQLx-based storage layer behind the [`UserRepository`] trait. The auth
//! core only ever sees the trait; the Postgres implementation lives in
//! [`pg`].
//!
//! # Example
//!
//! ```rust,ignore
//! use janus_db::{create_pool, PgUserRepository, UserRepository};
//!
//! let pool = create_pool("postgres://localhost/janus").await?;
//! let users = PgUserRepository::new(pool);
//!
//! let row = users.find_by_username("alice").await?;
//! ```

pub mod error;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use models::*;
pub use pg::PgUserRepository;
pub use pool::{create_pool, DbPool};
pub use repo::*;
