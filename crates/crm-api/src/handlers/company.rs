//! Company handlers.

use axum::Json;
use axum::extract::{Path, State};

use crm_core::error::AppError;
use crm_entity::CompanyInput;

use crate::dto::{CompaniesResponse, CompanyResponse};
use crate::extractors::{AuthUser, ValidatedJson, parse_uuid};
use crate::state::AppState;

/// GET /api/companies
pub async fn list_companies(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<CompaniesResponse>, AppError> {
    let companies = state.company_service.list(&auth).await?;
    Ok(Json(CompaniesResponse { companies }))
}

/// POST /api/companies
pub async fn create_company(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<CompanyInput>,
) -> Result<Json<CompanyResponse>, AppError> {
    let company = state.company_service.create(&auth, &input).await?;
    Ok(Json(CompanyResponse { company }))
}

/// PUT /api/companies/{id}
pub async fn update_company(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<CompanyInput>,
) -> Result<Json<CompanyResponse>, AppError> {
    let id = parse_uuid(&id)?;
    let company = state.company_service.update(&auth, id, &input).await?;
    Ok(Json(CompanyResponse { company }))
}
