//! Pipeline handlers.

use axum::Json;
use axum::extract::State;

use crm_core::error::AppError;

use crate::dto::PipelinesResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/pipelines
pub async fn list_pipelines(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<PipelinesResponse>, AppError> {
    let pipelines = state.pipeline_service.list(&auth).await?;
    Ok(Json(PipelinesResponse { pipelines }))
}
