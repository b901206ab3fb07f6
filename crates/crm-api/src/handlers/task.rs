//! Task handlers. Tasks belong to their owner, not to a team.

use axum::Json;
use axum::extract::{Path, State};

use crm_core::error::AppError;
use crm_entity::TaskInput;

use crate::dto::{TaskResponse, TasksResponse};
use crate::extractors::{AuthUser, ValidatedJson, parse_uuid};
use crate::state::AppState;

/// GET /api/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<TasksResponse>, AppError> {
    let tasks = state.task_service.list(&auth).await?;
    Ok(Json(TasksResponse { tasks }))
}

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<TaskInput>,
) -> Result<Json<TaskResponse>, AppError> {
    let task = state.task_service.create(&auth, &input).await?;
    Ok(Json(TaskResponse { task }))
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<TaskInput>,
) -> Result<Json<TaskResponse>, AppError> {
    let id = parse_uuid(&id)?;
    let task = state.task_service.update(&auth, id, &input).await?;
    Ok(Json(TaskResponse { task }))
}
