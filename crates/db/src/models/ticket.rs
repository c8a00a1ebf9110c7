//! Ticket models: bare row, customer-joined listing row, and the fully
//! joined detail shape served by the by-number endpoints.

use orca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ticket` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ticket {
    pub id: DbId,
    pub customer_id: DbId,
    pub subject: String,
    pub description: Option<String>,
    pub priority: String,
    pub ticket_number: String,
    pub status: String,
    pub due_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub device_id: Option<DbId>,
    pub ticket_type_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing row: ticket joined with its customer's name and the number of
/// tasks attached to it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TicketWithCustomer {
    pub id: DbId,
    pub customer_id: DbId,
    pub subject: String,
    pub description: Option<String>,
    pub priority: String,
    pub ticket_number: String,
    pub status: String,
    pub due_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub device_id: Option<DbId>,
    pub ticket_type_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_name: String,
    pub task_count: i64,
}

/// Detail row: ticket joined with its type name and linked device info.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TicketDetail {
    pub id: DbId,
    pub customer_id: DbId,
    pub subject: String,
    pub description: Option<String>,
    pub priority: String,
    pub ticket_number: String,
    pub status: String,
    pub due_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub device_id: Option<DbId>,
    pub ticket_type_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub ticket_type_name: Option<String>,
    pub device_brand_model: Option<String>,
    pub device_serial_number: Option<String>,
    pub device_type_id: Option<DbId>,
    pub device_type_name: Option<String>,
    pub device_notes: Option<String>,
}

/// Wire DTO for creating a ticket. Required fields are validated by the
/// handler before the insert; absence is a 400, not a database error.
#[derive(Debug, Deserialize)]
pub struct CreateTicket {
    pub customer_id: Option<DbId>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub ticket_number: Option<String>,
    pub ticket_type_id: Option<DbId>,
    pub device_id: Option<DbId>,
    pub due_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

/// DTO for updating a ticket by its number. The ticket number itself is
/// immutable and never part of the update.
#[derive(Debug, Deserialize)]
pub struct UpdateTicket {
    pub subject: String,
    pub status: String,
    pub priority: String,
    pub due_at: Option<Timestamp>,
    pub description: Option<String>,
    pub ticket_type_id: Option<DbId>,
    pub device_id: Option<DbId>,
}
