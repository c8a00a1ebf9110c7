//! Route definitions for direct device access.
//!
//! Mounted at `/devices` by `api_routes()`. Registration and listing are
//! customer-scoped and live under `/customers/{id}/devices`.

use axum::routing::put;
use axum::Router;

use crate::handlers::device;
use crate::state::AppState;

/// Device routes.
///
/// ```text
/// PUT /{equipment_id}   -> update (incl. custody changes)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{equipment_id}", put(device::update))
}
