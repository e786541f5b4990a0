//! Janus Auth API
//!
//! Authentication service: account registration, credential login, and
//! token-gated routes.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use janus_auth_core::AuthService;
use janus_db::PgUserRepository;

mod config;
mod error;
mod extractors;
mod handlers;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Janus Auth API");

    let config = Config::from_env()?;

    let pool = janus_db::create_pool(&config.database_url).await?;
    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let auth = AuthService::new(config.auth.clone(), users)?;
    let state = AppState::new(auth, pool);

    // Build router
    let app = Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/protected", get(handlers::protected))
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
