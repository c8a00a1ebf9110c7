//! Route definitions for customers and their devices.
//!
//! Mounted at `/customers` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{customer, device};
use crate::state::AppState;

/// Customer routes.
///
/// ```text
/// GET    /               -> list (with ticket counts; requires auth)
/// POST   /               -> create
/// GET    /{id}           -> get_by_id (customer + tickets)
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// GET    /{id}/devices   -> device list
/// POST   /{id}/devices   -> device create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(customer::list).post(customer::create))
        .route(
            "/{id}",
            get(customer::get_by_id)
                .put(customer::update)
                .delete(customer::delete),
        )
        .route(
            "/{id}/devices",
            get(device::list_by_customer).post(device::create),
        )
}
