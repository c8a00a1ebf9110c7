//! Customer model and the derived ticket-count summary.

use orca_core::ticket_counts::TicketStatusCounts;
use orca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `customer` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub unit: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub phone_number: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Wire DTO for creating a customer. The address arrives as a single
/// comma-separated string and is split into columns by the handler.
#[derive(Debug, Deserialize)]
pub struct CreateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

/// Column values for a customer insert, produced from [`CreateCustomer`]
/// after validation and address splitting.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub unit: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub phone_number: Option<String>,
    pub status: String,
}

/// DTO for a partial customer update.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub status: Option<String>,
    pub unit: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

/// Flat aggregation row: one customer with conditional ticket counts.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerTicketCountsRow {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
    pub total_tickets: i64,
    pub pending_tickets: i64,
    pub waiting_tickets: i64,
    pub in_progress_tickets: i64,
    pub closed_tickets: i64,
    pub ready_tickets: i64,
}

/// Customer listing entry with the nested `ticket_info` breakdown the
/// presentation layer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerWithTicketInfo {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
    pub total_tickets: i64,
    pub ticket_info: TicketStatusCounts,
}

impl From<CustomerTicketCountsRow> for CustomerWithTicketInfo {
    fn from(row: CustomerTicketCountsRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            status: row.status,
            total_tickets: row.total_tickets,
            ticket_info: TicketStatusCounts {
                pending: row.pending_tickets,
                waiting: row.waiting_tickets,
                in_progress: row.in_progress_tickets,
                closed: row.closed_tickets,
                ready: row.ready_tickets,
            },
        }
    }
}
