//! Route tree assembly.

pub mod auth;
pub mod customers;
pub mod devices;
pub mod health;
pub mod lookups;
pub mod tasks;
pub mod tickets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/me                             identity probe (requires auth)
///
/// /customers                           list (auth), create
/// /customers/{id}                      get, update, delete
/// /customers/{id}/devices              list, create
///
/// /tickets                             list, create
/// /tickets/count                       same-day creation count (GET)
/// /tickets/next-number                 candidate ticket number (GET)
/// /tickets/by-number/{ticket_number}   get, update
/// /tickets/{id}                        get, delete
/// /tickets/{id}/tasks                  list, create
/// /tickets/{id}/worklogs               list, create
///
/// /tasks/{id}                          update, delete
///
/// /devices/{equipment_id}              update
///
/// /ticket-types                        list
/// /task-types                          list
/// /device-types                        list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/customers", customers::router())
        .nest("/tickets", tickets::router())
        .nest("/tasks", tasks::router())
        .nest("/devices", devices::router())
        .merge(lookups::router())
}
