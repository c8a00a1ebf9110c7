//! Handlers for ticket worklogs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use orca_core::error::CoreError;
use orca_core::types::DbId;
use serde_json::json;

use orca_db::models::worklog::{CreateWorklog, Worklog};
use orca_db::repositories::{TicketRepo, WorklogRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/tickets/{id}/worklogs
pub async fn list_by_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<DbId>,
) -> AppResult<Json<Vec<Worklog>>> {
    let worklogs = WorklogRepo::list_by_ticket(&state.pool, ticket_id).await?;
    Ok(Json(worklogs))
}

/// POST /api/v1/tickets/{id}/worklogs
///
/// Record a worklog entry under a ticket. Description is required; hours
/// default to 0 and must not be negative.
pub async fn create(
    State(state): State<AppState>,
    Path(ticket_id): Path<DbId>,
    Json(input): Json<CreateWorklog>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let description = match input.description {
        Some(d) if !d.trim().is_empty() => d,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Description is required".into(),
            )))
        }
    };
    let hours = input.hours.unwrap_or(0.0);
    if hours < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Hours must not be negative".into(),
        )));
    }

    TicketRepo::find_by_id(&state.pool, ticket_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id: ticket_id,
        }))?;

    let id = WorklogRepo::create(&state.pool, ticket_id, &description, hours).await?;
    Ok((StatusCode::CREATED, Json(json!({ "success": true, "id": id }))))
}
