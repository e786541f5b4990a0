//! HTTP handlers

mod auth;
mod health;
mod protected;

pub use auth::{login, register};
pub use health::{health, ready};
pub use protected::protected;
