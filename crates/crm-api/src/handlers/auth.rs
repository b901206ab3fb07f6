//! Auth handlers: sign-in and current session.

use axum::Json;
use axum::extract::State;

use crm_auth::{SignInRequest, SignInResult};
use crm_core::error::AppError;

use crate::dto::SessionResponse;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/signin
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignInRequest>,
) -> Result<Json<SignInResult>, AppError> {
    let result = state.session_manager.sign_in(&req).await?;
    Ok(Json(result))
}

/// GET /api/auth/session
pub async fn session(auth: AuthUser) -> Json<SessionResponse> {
    Json(SessionResponse {
        user: auth.session_user(),
    })
}
