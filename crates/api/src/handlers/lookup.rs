//! Handlers for the lookup dictionaries.

use axum::extract::State;
use axum::Json;

use orca_db::models::lookup::{DeviceType, TaskType, TicketType};
use orca_db::repositories::{DeviceTypeRepo, TaskTypeRepo, TicketTypeRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/ticket-types
pub async fn list_ticket_types(State(state): State<AppState>) -> AppResult<Json<Vec<TicketType>>> {
    Ok(Json(TicketTypeRepo::list(&state.pool).await?))
}

/// GET /api/v1/task-types
pub async fn list_task_types(State(state): State<AppState>) -> AppResult<Json<Vec<TaskType>>> {
    Ok(Json(TaskTypeRepo::list(&state.pool).await?))
}

/// GET /api/v1/device-types
pub async fn list_device_types(State(state): State<AppState>) -> AppResult<Json<Vec<DeviceType>>> {
    Ok(Json(DeviceTypeRepo::list(&state.pool).await?))
}
