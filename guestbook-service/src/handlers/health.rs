use crate::dtos::HealthResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use service_core::error::AppError;

/// Liveness: answers without touching the store.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Readiness: the store must answer a ping.
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        AppError::ServiceUnavailable
    })?;

    Ok(Json(json!({ "status": "ready" })))
}
