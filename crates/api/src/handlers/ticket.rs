//! Handlers for the `/tickets` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use orca_core::due::{self, DueDays};
use orca_core::error::CoreError;
use orca_core::status::{Priority, TicketStatus};
use orca_core::ticket_number;
use orca_core::types::DbId;
use serde::{Deserialize, Serialize};
use serde_json::json;

use orca_db::models::ticket::{CreateTicket, TicketDetail, TicketWithCustomer, UpdateTicket};
use orca_db::repositories::ticket_repo::NewTicket;
use orca_db::repositories::{CustomerRepo, TicketRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Default listing size when the client does not pass `limit`.
const DEFAULT_LIST_LIMIT: i64 = 10;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /tickets`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// A stored status value, or `!closed` (the default) for the working
    /// view of everything not yet closed.
    pub status: Option<String>,
    pub limit: Option<i64>,
}

/// Query parameters for `GET /tickets/count`.
#[derive(Debug, Deserialize)]
pub struct CountParams {
    /// Calendar date in `YYYYMMDD` form.
    pub date: Option<String>,
}

/// Ticket detail plus the derived due-date presentation field.
#[derive(Debug, Serialize)]
pub struct TicketDetailResponse {
    #[serde(flatten)]
    pub ticket: TicketDetail,
    /// Relative due text and overdue flag; absent when the ticket has no
    /// due date.
    pub due: Option<DueDays>,
}

impl From<TicketDetail> for TicketDetailResponse {
    fn from(ticket: TicketDetail) -> Self {
        let due = due::due_days(Utc::now(), ticket.due_at);
        Self { ticket, due }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/tickets?status=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<TicketWithCustomer>>> {
    let status = match params.status.as_deref() {
        None | Some("!closed") => None,
        Some(s) => {
            let parsed =
                TicketStatus::from_str_value(s).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
            Some(parsed.as_str())
        }
    };
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT).max(1);

    let tickets = TicketRepo::list(&state.pool, status, limit).await?;
    Ok(Json(tickets))
}

/// POST /api/v1/tickets
///
/// Create a ticket. customer_id, subject, priority, ticket_number, and
/// ticket_type_id are required; the referenced customer must exist. A
/// ticket number already taken by a same-day race comes back as 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTicket>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let customer_id = input.customer_id.ok_or_else(|| missing("customer_id"))?;
    let subject = match input.subject {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err(missing("subject")),
    };
    let priority_str = input.priority.ok_or_else(|| missing("priority"))?;
    let ticket_number = match input.ticket_number {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(missing("ticket_number")),
    };
    let ticket_type_id = input.ticket_type_id.ok_or_else(|| missing("ticket_type_id"))?;

    let priority = Priority::from_str_value(&priority_str)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    CustomerRepo::find_by_id(&state.pool, customer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id: customer_id,
        }))?;

    let new_ticket = NewTicket {
        customer_id,
        subject,
        description: input.description,
        priority: priority.as_str().to_string(),
        ticket_number,
        ticket_type_id,
        device_id: input.device_id,
        due_at: input.due_at,
        completed_at: input.completed_at,
    };

    let id = TicketRepo::create(&state.pool, &new_ticket).await?;
    Ok((StatusCode::CREATED, Json(json!({ "success": true, "id": id }))))
}

/// GET /api/v1/tickets/count?date=YYYYMMDD
///
/// Count tickets created on a calendar date. Feeds client-side candidate
/// number generation.
pub async fn count(
    State(state): State<AppState>,
    Query(params): Query<CountParams>,
) -> AppResult<Json<serde_json::Value>> {
    let date_param = params.date.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Missing date parameter".into()))
    })?;
    let date = ticket_number::parse_date_key(&date_param)?;

    let count = TicketRepo::count_created_on(&state.pool, date).await?;
    Ok(Json(json!({ "count": count })))
}

/// GET /api/v1/tickets/next-number
///
/// The candidate ticket number for a ticket created right now. An
/// idempotent read: asking twice without an intervening insert yields the
/// same candidate.
pub async fn next_number(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let today = Utc::now().date_naive();
    let count = TicketRepo::count_created_on(&state.pool, today).await?;
    let candidate = ticket_number::candidate(today, count);
    Ok(Json(json!({ "ticket_number": candidate })))
}

/// GET /api/v1/tickets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TicketDetailResponse>> {
    let detail = TicketRepo::detail_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id,
        }))?;
    Ok(Json(detail.into()))
}

/// GET /api/v1/tickets/by-number/{ticket_number}
pub async fn get_by_number(
    State(state): State<AppState>,
    Path(ticket_number): Path<String>,
) -> AppResult<Json<TicketDetailResponse>> {
    let detail = TicketRepo::detail_by_number(&state.pool, &ticket_number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ticket {ticket_number} not found")))?;
    Ok(Json(detail.into()))
}

/// PUT /api/v1/tickets/by-number/{ticket_number}
///
/// Update the editable fields, then return the re-fetched detail row. The
/// ticket number itself never changes.
pub async fn update_by_number(
    State(state): State<AppState>,
    Path(ticket_number): Path<String>,
    Json(input): Json<UpdateTicket>,
) -> AppResult<Json<TicketDetailResponse>> {
    TicketStatus::from_str_value(&input.status)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    Priority::from_str_value(&input.priority)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let detail = TicketRepo::update_by_number(&state.pool, &ticket_number, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ticket {ticket_number} not found")))?;
    Ok(Json(detail.into()))
}

/// DELETE /api/v1/tickets/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TicketRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn missing(field: &str) -> AppError {
    AppError::Core(CoreError::Validation(format!(
        "Missing required field: {field}"
    )))
}
