//! Deal handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crm_core::error::AppError;
use crm_core::types::response::SuccessResponse;
use crm_entity::{DealDetail, DealInput};

use crate::dto::DealsResponse;
use crate::extractors::{AuthUser, ValidatedJson, parse_uuid};
use crate::state::AppState;

/// GET /api/deals
pub async fn list_deals(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<DealsResponse>, AppError> {
    let deals = state.deal_service.list(&auth).await?;
    Ok(Json(DealsResponse { deals }))
}

/// POST /api/deals
pub async fn create_deal(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<DealInput>,
) -> Result<(StatusCode, Json<DealDetail>), AppError> {
    let deal = state.deal_service.create(&auth, &input).await?;
    Ok((StatusCode::CREATED, Json(deal)))
}

/// GET /api/deals/{id}
pub async fn get_deal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DealDetail>, AppError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.deal_service.get(&auth, id).await?))
}

/// PUT /api/deals/{id}
pub async fn update_deal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<DealInput>,
) -> Result<Json<DealDetail>, AppError> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.deal_service.update(&auth, id, &input).await?))
}

/// DELETE /api/deals/{id}
pub async fn delete_deal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let id = parse_uuid(&id)?;
    state.deal_service.delete(&auth, id).await?;
    Ok(Json(SuccessResponse::ok()))
}
