//! Route definitions for the money tracker API

mod expense;

use axum::{routing::get, Router};
use std::path::Path;
use tower_http::services::ServeDir;

use crate::handlers::health_check;
use crate::middleware;
use crate::state::AppState;

pub use expense::expense_routes;

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(expense_routes())
        .with_state(state)
}

/// API router with state applied and request logging attached
pub fn create_router(state: AppState) -> Router {
    api_routes(state).layer(axum::middleware::from_fn(middleware::request_tracing))
}

/// API router with files under `static_dir` served for every other path.
/// Request logging covers both.
pub fn create_app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    api_routes(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
}
