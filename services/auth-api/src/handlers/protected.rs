//! A token-gated demonstration route

use axum::Json;
use serde::Serialize;

use crate::extractors::AuthUser;

#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: &'static str,
    pub username: String,
}

/// GET /protected
///
/// Reachable only through the access guard; the handler itself performs no
/// further checks on the claims.
pub async fn protected(user: AuthUser) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "this is a secret path",
        username: user.subject().to_string(),
    })
}
