//! Route definitions for tickets and their nested tasks and worklogs.
//!
//! Mounted at `/tickets` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{task, ticket, worklog};
use crate::state::AppState;

/// Ticket routes.
///
/// ```text
/// GET    /                            -> list (?status, ?limit)
/// POST   /                            -> create
/// GET    /count                       -> count (?date=YYYYMMDD)
/// GET    /next-number                 -> next_number
/// GET    /by-number/{ticket_number}   -> get_by_number
/// PUT    /by-number/{ticket_number}   -> update_by_number
/// GET    /{id}                        -> get_by_id
/// DELETE /{id}                        -> delete
/// GET    /{id}/tasks                  -> task list
/// POST   /{id}/tasks                  -> task create
/// GET    /{id}/worklogs               -> worklog list
/// POST   /{id}/worklogs               -> worklog create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ticket::list).post(ticket::create))
        .route("/count", get(ticket::count))
        .route("/next-number", get(ticket::next_number))
        .route(
            "/by-number/{ticket_number}",
            get(ticket::get_by_number).put(ticket::update_by_number),
        )
        .route("/{id}", get(ticket::get_by_id).delete(ticket::delete))
        .route("/{id}/tasks", get(task::list_by_ticket).post(task::create))
        .route(
            "/{id}/worklogs",
            get(worklog::list_by_ticket).post(worklog::create),
        )
}
