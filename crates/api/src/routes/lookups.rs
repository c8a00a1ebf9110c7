//! Route definitions for the lookup dictionaries.
//!
//! Merged directly into `api_routes()` (no shared prefix).

use axum::routing::get;
use axum::Router;

use crate::handlers::lookup;
use crate::state::AppState;

/// Lookup routes.
///
/// ```text
/// GET /ticket-types   -> list_ticket_types
/// GET /task-types     -> list_task_types
/// GET /device-types   -> list_device_types
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ticket-types", get(lookup::list_ticket_types))
        .route("/task-types", get(lookup::list_task_types))
        .route("/device-types", get(lookup::list_device_types))
}
