//! `api` crate — HTTP endpoint layer.
//!
//! Routes, all behind the API-key gate:
//!   POST /departments/new
//!   GET  /departments/daily_pay
//!   POST /departments/total_paid
//!   GET  /departments/history

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use db::DbPool;

pub mod auth;
pub mod handlers;

#[cfg(test)]
mod router_tests;

/// State handed to every handler: the pool plus the expected API key.
/// Cloned per request; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub api_key: String,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/departments/new", post(handlers::departments::add_new_department))
        .route("/departments/daily_pay", get(handlers::departments::daily_pay))
        .route("/departments/total_paid", post(handlers::departments::total_paid))
        .route("/departments/history", get(handlers::departments::history))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_api_key))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "API server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
