//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crm_core::error::AppError;

use crate::dto::{HealthResponse, ReadinessResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/health/ready
///
/// 503 when the database cannot be reached.
pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadinessResponse>, AppError> {
    state.db.health_check().await?;
    Ok(Json(ReadinessResponse {
        status: "ok",
        database: "connected",
    }))
}
