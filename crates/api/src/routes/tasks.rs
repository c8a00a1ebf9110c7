//! Route definitions for direct task access.
//!
//! Mounted at `/tasks` by `api_routes()`. Creation and listing are
//! ticket-scoped and live under `/tickets/{id}/tasks`.

use axum::routing::put;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Task routes.
///
/// ```text
/// PUT    /{id}   -> update (completion recording or field edit)
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(task::update).delete(task::delete))
}
