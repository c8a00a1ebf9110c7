//! Handlers for the `/customers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use orca_core::error::CoreError;
use orca_core::status::{CustomerStatus, TicketStatus};
use orca_core::ticket_counts::{self, TicketStatusCounts};
use orca_core::types::DbId;
use serde::Serialize;
use serde_json::json;

use orca_db::models::customer::{
    CreateCustomer, Customer, CustomerWithTicketInfo, NewCustomer, UpdateCustomer,
};
use orca_db::models::ticket::TicketWithCustomer;
use orca_db::repositories::{CustomerRepo, TicketRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// The `customer` half of the detail response: the row plus its derived
/// ticket tallies.
#[derive(Debug, Serialize)]
pub struct CustomerDetail {
    #[serde(flatten)]
    pub customer: Customer,
    pub ticket_count: i64,
    pub ticket_info: TicketStatusCounts,
}

/// Response for `GET /customers/{id}`.
#[derive(Debug, Serialize)]
pub struct CustomerDetailResponse {
    pub customer: CustomerDetail,
    pub tickets: Vec<TicketWithCustomer>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/customers
///
/// List all customers with live ticket counts bucketed by status. Requires
/// authentication; this is the landing view of the whole book of business.
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CustomerWithTicketInfo>>> {
    let rows = CustomerRepo::list_with_ticket_counts(&state.pool).await?;
    let customers = rows.into_iter().map(CustomerWithTicketInfo::from).collect();
    Ok(Json(customers))
}

/// POST /api/v1/customers
///
/// Create a customer. The address arrives as one comma-separated string and
/// is split into unit/street/city/postal_code columns.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let first_name = require_field(input.first_name, "first_name")?;
    let last_name = require_field(input.last_name, "last_name")?;
    let email = require_field(input.email, "email")?;

    let status = match input.status.as_deref() {
        None => CustomerStatus::Lead,
        Some(s) => CustomerStatus::from_str_value(s)
            .map_err(|e| AppError::Core(CoreError::Validation(e)))?,
    };

    let (unit, street, city, postal_code) = split_address(input.address.as_deref());

    let new_customer = NewCustomer {
        first_name,
        last_name,
        email,
        unit,
        street,
        city,
        postal_code,
        phone_number: input.phone,
        status: status.as_str().to_string(),
    };

    let customer = CustomerRepo::create(&state.pool, &new_customer).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": customer.id }))))
}

/// GET /api/v1/customers/{id}
///
/// Customer detail: the row, its tickets (newest first), and the derived
/// ticket tallies computed from the fetched tickets.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CustomerDetailResponse>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;

    let tickets = TicketRepo::list_by_customer(&state.pool, id).await?;

    let statuses = tickets
        .iter()
        .map(|t| TicketStatus::from_str_value(&t.status))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::InternalError(format!("Corrupt ticket status: {e}")))?;
    let (ticket_count, ticket_info) = ticket_counts::tally(statuses);

    Ok(Json(CustomerDetailResponse {
        customer: CustomerDetail {
            customer,
            ticket_count,
            ticket_info,
        },
        tickets,
    }))
}

/// PUT /api/v1/customers/{id}
///
/// Partial update; omitted fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<serde_json::Value>> {
    if let Some(status) = input.status.as_deref() {
        CustomerStatus::from_str_value(status)
            .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    }

    CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/v1/customers/{id}
///
/// Physical delete; tickets, tasks, and worklogs cascade.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CustomerRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn require_field(value: Option<String>, name: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Core(CoreError::Validation(format!(
            "Missing required field: {name}"
        )))),
    }
}

/// Split a comma-separated address into (unit, street, city, postal_code).
/// Missing trailing parts come back as `None`.
fn split_address(
    address: Option<&str>,
) -> (
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
) {
    let Some(address) = address else {
        return (None, None, None, None);
    };
    let mut parts = address
        .split(',')
        .map(|s| s.trim())
        .map(|s| (!s.is_empty()).then(|| s.to_string()));
    (
        parts.next().flatten(),
        parts.next().flatten(),
        parts.next().flatten(),
        parts.next().flatten(),
    )
}
