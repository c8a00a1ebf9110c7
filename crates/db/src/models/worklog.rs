//! Ticket worklog models.

use orca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ticket_worklog` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Worklog {
    pub id: DbId,
    pub ticket_id: DbId,
    pub description: String,
    pub hours: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a worklog entry under a ticket.
#[derive(Debug, Deserialize)]
pub struct CreateWorklog {
    pub description: Option<String>,
    pub hours: Option<f64>,
}
