//! Lookup dictionaries: ticket types, task types, device types.
//!
//! Pure id-to-name tables with no behavior and no write DTOs; rows are
//! seeded out of band.

use orca_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `ticket_type` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TicketType {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// A row from the `task_type` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TaskType {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// A row from the `device_type` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DeviceType {
    pub id: DbId,
    pub name: String,
}
