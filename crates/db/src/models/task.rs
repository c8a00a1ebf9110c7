//! Ticket task models.

use orca_core::task_lifecycle::TaskUpdate;
use orca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ticket_task` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TicketTask {
    pub id: DbId,
    pub ticket_id: DbId,
    pub task_type_id: Option<DbId>,
    pub task_description: String,
    pub minutes: i32,
    pub status: String,
    pub notes: Option<String>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Task row joined with its type name for listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TaskWithTypeName {
    pub id: DbId,
    pub ticket_id: DbId,
    pub task_type_id: Option<DbId>,
    pub task_description: String,
    pub minutes: i32,
    pub status: String,
    pub notes: Option<String>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub task_type_name: Option<String>,
}

/// DTO for creating a task under a ticket.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub task_type_id: Option<DbId>,
    pub task_description: Option<String>,
    pub status: Option<String>,
}

/// DTO for a task update. Converted into the core [`TaskUpdate`] request
/// and planned there; the repository only ever sees a validated plan.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    pub task_description: Option<String>,
    pub task_type_id: Option<DbId>,
    pub minutes: Option<i32>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl From<UpdateTask> for TaskUpdate {
    fn from(dto: UpdateTask) -> Self {
        Self {
            task_description: dto.task_description,
            task_type_id: dto.task_type_id,
            minutes: dto.minutes,
            status: dto.status,
            notes: dto.notes,
        }
    }
}
