//! Handlers for ticket tasks.
//!
//! Creation and listing are ticket-scoped; update and delete address the
//! task directly. All update validation happens in
//! `orca_core::task_lifecycle` before any SQL runs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use orca_core::error::CoreError;
use orca_core::task_lifecycle::{plan_task_update, validate_new_task};
use orca_core::types::DbId;
use serde_json::json;

use orca_db::models::task::{CreateTask, TaskWithTypeName, UpdateTask};
use orca_db::repositories::{TaskRepo, TicketRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/tickets/{id}/tasks
pub async fn list_by_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<DbId>,
) -> AppResult<Json<Vec<TaskWithTypeName>>> {
    let tasks = TaskRepo::list_by_ticket(&state.pool, ticket_id).await?;
    Ok(Json(tasks))
}

/// POST /api/v1/tickets/{id}/tasks
///
/// Create a task under a ticket. Description is required; status defaults
/// to `Not Started`. Nothing is inserted when validation fails.
pub async fn create(
    State(state): State<AppState>,
    Path(ticket_id): Path<DbId>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let description = input.task_description.unwrap_or_default();
    let status = validate_new_task(&description, input.status.as_deref())?;

    TicketRepo::find_by_id(&state.pool, ticket_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id: ticket_id,
        }))?;

    let id = TaskRepo::create(
        &state.pool,
        ticket_id,
        input.task_type_id,
        &description,
        status,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(json!({ "success": true, "id": id }))))
}

/// PUT /api/v1/tasks/{id}
///
/// Apply a task update: either a completion recording (minutes + Completed
/// status stamps `completed_at`) or a field edit. A missing or empty status
/// is rejected before any write.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<serde_json::Value>> {
    let plan = plan_task_update(input.into())?;

    let updated = TaskRepo::apply_update(&state.pool, id, &plan).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "Task", id }));
    }
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}
