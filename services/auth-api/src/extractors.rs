//! Axum extractors for authentication
//!
//! The access guard: pull the bearer token out of its one canonical
//! carrier, verify it, and only then let the wrapped handler run.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header, request::Parts};

use janus_auth_core::Claims;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a verified bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
}

impl AuthUser {
    /// The authenticated username
    pub fn subject(&self) -> &str {
        &self.claims.sub
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Absent or non-Bearer Authorization reads as no token at all.
        let token = bearer_token(parts).ok_or(ApiError::Unauthorized)?;

        let claims = app_state.auth.tokens().verify(token).map_err(|e| {
            // The sub-reason stays in the logs; callers get a uniform 401.
            tracing::debug!(error = %e, "token rejected by access guard");
            ApiError::Unauthorized
        })?;

        Ok(AuthUser { claims })
    }
}

/// Extract a bearer token from the Authorization header
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
