//! Repository for the `ticket_worklog` table.

use orca_core::types::DbId;
use sqlx::PgPool;

use crate::models::worklog::Worklog;

/// Column list for worklog queries.
const COLUMNS: &str = "id, ticket_id, description, hours, created_at, updated_at";

/// Provides list/create operations for ticket worklogs.
pub struct WorklogRepo;

impl WorklogRepo {
    /// List a ticket's worklog entries, oldest first.
    pub async fn list_by_ticket(
        pool: &PgPool,
        ticket_id: DbId,
    ) -> Result<Vec<Worklog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ticket_worklog
             WHERE ticket_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Worklog>(&query)
            .bind(ticket_id)
            .fetch_all(pool)
            .await
    }

    /// Create a worklog entry under a ticket, returning its ID.
    pub async fn create(
        pool: &PgPool,
        ticket_id: DbId,
        description: &str,
        hours: f64,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO ticket_worklog (ticket_id, description, hours)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(ticket_id)
        .bind(description)
        .bind(hours)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }
}
