//! Handlers for customer devices.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use orca_core::error::CoreError;
use orca_core::status::CustodyStatus;
use orca_core::types::DbId;
use serde_json::json;

use orca_db::models::device::{CreateDevice, DeviceWithTypeName, UpdateDevice};
use orca_db::repositories::{CustomerRepo, DeviceRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/customers/{id}/devices
pub async fn list_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<DbId>,
) -> AppResult<Json<Vec<DeviceWithTypeName>>> {
    let devices = DeviceRepo::list_by_customer(&state.pool, customer_id).await?;
    Ok(Json(devices))
}

/// POST /api/v1/customers/{id}/devices
///
/// Register a device under a customer. Custody starts at `with_customer`.
pub async fn create(
    State(state): State<AppState>,
    Path(customer_id): Path<DbId>,
    Json(input): Json<CreateDevice>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    CustomerRepo::find_by_id(&state.pool, customer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id: customer_id,
        }))?;

    let id = DeviceRepo::create(&state.pool, customer_id, &input).await?;
    Ok((StatusCode::CREATED, Json(json!({ "success": true, "id": id }))))
}

/// PUT /api/v1/devices/{equipment_id}
///
/// Partial update; a custody change stamps `custody_changed_at`.
pub async fn update(
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
    Json(input): Json<UpdateDevice>,
) -> AppResult<Json<serde_json::Value>> {
    if let Some(custody) = input.custody_status.as_deref() {
        CustodyStatus::from_str_value(custody)
            .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    }

    DeviceRepo::update(&state.pool, equipment_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Device",
            id: equipment_id,
        }))?;
    Ok(Json(json!({ "success": true })))
}
