//! Contact handlers.

use axum::Json;
use axum::extract::{Path, State};

use crm_core::error::AppError;
use crm_entity::ContactInput;

use crate::dto::{ContactResponse, ContactsResponse};
use crate::extractors::{AuthUser, ValidatedJson, parse_uuid};
use crate::state::AppState;

/// GET /api/contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ContactsResponse>, AppError> {
    let contacts = state.contact_service.list(&auth).await?;
    Ok(Json(ContactsResponse { contacts }))
}

/// POST /api/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<ContactInput>,
) -> Result<Json<ContactResponse>, AppError> {
    let contact = state.contact_service.create(&auth, &input).await?;
    Ok(Json(ContactResponse { contact }))
}

/// PUT /api/contacts/{id}
pub async fn update_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<ContactInput>,
) -> Result<Json<ContactResponse>, AppError> {
    let id = parse_uuid(&id)?;
    let contact = state.contact_service.update(&auth, id, &input).await?;
    Ok(Json(ContactResponse { contact }))
}
