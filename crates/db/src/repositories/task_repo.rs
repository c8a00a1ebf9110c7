//! Repository for the `ticket_task` table.
//!
//! Writes are driven by the plans produced in `orca_core::task_lifecycle`;
//! no update reaches this layer without having been validated there.

use orca_core::status::TaskStatus;
use orca_core::task_lifecycle::TaskUpdatePlan;
use orca_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{TaskWithTypeName, TicketTask};

/// Column list for task queries.
const COLUMNS: &str = "id, ticket_id, task_type_id, task_description, minutes, \
                       status, notes, completed_at, created_at, updated_at";

/// Provides CRUD operations for ticket tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List a ticket's tasks with type names, newest first.
    pub async fn list_by_ticket(
        pool: &PgPool,
        ticket_id: DbId,
    ) -> Result<Vec<TaskWithTypeName>, sqlx::Error> {
        sqlx::query_as::<_, TaskWithTypeName>(
            "SELECT tt.id, tt.ticket_id, tt.task_type_id, tt.task_description,
                tt.minutes, tt.status, tt.notes, tt.completed_at,
                tt.created_at, tt.updated_at,
                ty.name AS task_type_name
             FROM ticket_task tt
             LEFT JOIN task_type ty ON tt.task_type_id = ty.id
             WHERE tt.ticket_id = $1
             ORDER BY tt.created_at DESC",
        )
        .bind(ticket_id)
        .fetch_all(pool)
        .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TicketTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ticket_task WHERE id = $1");
        sqlx::query_as::<_, TicketTask>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a task under a ticket, returning its ID. Minutes start at 0
    /// and `completed_at` unset.
    pub async fn create(
        pool: &PgPool,
        ticket_id: DbId,
        task_type_id: Option<DbId>,
        description: &str,
        status: TaskStatus,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO ticket_task (ticket_id, task_type_id, task_description, status)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(ticket_id)
        .bind(task_type_id)
        .bind(description)
        .bind(status.as_str())
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Apply a validated update plan to a task. Returns `false` when the
    /// task does not exist.
    ///
    /// A completion recording touches only minutes/status/notes and stamps
    /// `completed_at`; a field edit rewrites the descriptive columns and
    /// stamps `completed_at` only when the new status is Completed. The
    /// stamp is never cleared by moving away from Completed.
    pub async fn apply_update(
        pool: &PgPool,
        id: DbId,
        plan: &TaskUpdatePlan,
    ) -> Result<bool, sqlx::Error> {
        let result = match plan {
            TaskUpdatePlan::RecordCompletion { minutes, notes } => {
                sqlx::query(
                    "UPDATE ticket_task SET
                        minutes = $2,
                        status = $3,
                        notes = COALESCE($4, notes),
                        completed_at = now(),
                        updated_at = now()
                     WHERE id = $1",
                )
                .bind(id)
                .bind(minutes)
                .bind(TaskStatus::Completed.as_str())
                .bind(notes)
                .execute(pool)
                .await?
            }
            TaskUpdatePlan::EditFields {
                task_description,
                task_type_id,
                minutes,
                status,
                notes,
            } => {
                sqlx::query(
                    "UPDATE ticket_task SET
                        task_description = $2,
                        task_type_id = $3,
                        minutes = $4,
                        status = $5,
                        notes = COALESCE($6, notes),
                        completed_at = CASE WHEN $7 THEN now() ELSE completed_at END,
                        updated_at = now()
                     WHERE id = $1",
                )
                .bind(id)
                .bind(task_description)
                .bind(task_type_id)
                .bind(minutes)
                .bind(status.as_str())
                .bind(notes)
                .bind(plan.stamps_completion())
                .execute(pool)
                .await?
            }
        };
        Ok(result.rows_affected() > 0)
    }

    /// Delete a task by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ticket_task WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
