//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: None,
    })
}

/// Readiness check (includes the ledger store)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let result = state.dispatcher.store().health_check().await;
    let response = HealthResponse {
        status: if result.is_healthy() { "ready" } else { "unavailable" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: Some(result.adapter_id.clone()),
    };

    if result.is_healthy() {
        Ok(Json(response))
    } else {
        tracing::warn!(adapter = %result.adapter_id, message = ?result.message, "Store not ready");
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
