//! Health check handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::expense::ExpenseStore;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
}

/// Reports whether the store answers, always with 200
pub async fn health_check(State(store): State<Arc<dyn ExpenseStore>>) -> Json<HealthResponse> {
    let (status, database) = match store.ping().await {
        Ok(()) => ("healthy", "connected".to_string()),
        Err(e) => ("unhealthy", format!("error: {}", e)),
    };

    Json(HealthResponse {
        status: status.to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
