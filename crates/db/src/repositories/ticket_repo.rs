//! Repository for the `ticket` table.

use chrono::NaiveDate;
use orca_core::types::DbId;
use sqlx::PgPool;

use crate::models::ticket::{Ticket, TicketDetail, TicketWithCustomer, UpdateTicket};

/// Column list for bare ticket queries.
const COLUMNS: &str = "id, customer_id, subject, description, priority, ticket_number, \
                       status, due_at, completed_at, device_id, ticket_type_id, \
                       created_at, updated_at";

/// Qualified column list for joined queries.
const T_COLUMNS: &str =
    "t.id, t.customer_id, t.subject, t.description, t.priority, t.ticket_number, \
     t.status, t.due_at, t.completed_at, t.device_id, t.ticket_type_id, \
     t.created_at, t.updated_at";

/// Column values for a ticket insert, validated by the handler.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub customer_id: DbId,
    pub subject: String,
    pub description: Option<String>,
    pub priority: String,
    pub ticket_number: String,
    pub ticket_type_id: DbId,
    pub device_id: Option<DbId>,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Provides CRUD operations and numbering support for tickets.
pub struct TicketRepo;

impl TicketRepo {
    /// List recent tickets with customer name fields and task counts.
    ///
    /// `status` filters to one stored value; `None` means everything that is
    /// not closed (the default working view). Ordered newest first.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
    ) -> Result<Vec<TicketWithCustomer>, sqlx::Error> {
        let filter = match status {
            Some(_) => "t.status = $1",
            None => "t.status != $1",
        };
        let bound = status.unwrap_or("closed");
        let query = format!(
            "SELECT {T_COLUMNS},
                c.first_name AS customer_first_name,
                c.last_name AS customer_last_name,
                c.first_name || ' ' || c.last_name AS customer_name,
                (SELECT COUNT(*) FROM ticket_task tt WHERE tt.ticket_id = t.id) AS task_count
             FROM ticket t
             JOIN customer c ON t.customer_id = c.id
             WHERE {filter}
             ORDER BY t.created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, TicketWithCustomer>(&query)
            .bind(bound)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List a customer's tickets, newest first, with task counts.
    pub async fn list_by_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<TicketWithCustomer>, sqlx::Error> {
        let query = format!(
            "SELECT {T_COLUMNS},
                c.first_name AS customer_first_name,
                c.last_name AS customer_last_name,
                c.first_name || ' ' || c.last_name AS customer_name,
                (SELECT COUNT(*) FROM ticket_task tt WHERE tt.ticket_id = t.id) AS task_count
             FROM ticket t
             JOIN customer c ON t.customer_id = c.id
             WHERE t.customer_id = $1
             ORDER BY t.created_at DESC"
        );
        sqlx::query_as::<_, TicketWithCustomer>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// Count tickets created on a calendar date. Feeds the same-day
    /// sequence of the ticket number generator.
    pub async fn count_created_on(pool: &PgPool, date: NaiveDate) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM ticket WHERE created_at::date = $1")
                .bind(date)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Find a ticket by ID, without joins.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ticket WHERE id = $1");
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the joined detail row for a ticket by ID.
    pub async fn detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TicketDetail>, sqlx::Error> {
        let query = format!("{} WHERE t.id = $1", Self::detail_query());
        sqlx::query_as::<_, TicketDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the joined detail row for a ticket by its number.
    pub async fn detail_by_number(
        pool: &PgPool,
        ticket_number: &str,
    ) -> Result<Option<TicketDetail>, sqlx::Error> {
        let query = format!("{} WHERE t.ticket_number = $1", Self::detail_query());
        sqlx::query_as::<_, TicketDetail>(&query)
            .bind(ticket_number)
            .fetch_optional(pool)
            .await
    }

    /// Create a new ticket, returning its ID.
    ///
    /// The status starts at `open`; a duplicate ticket number trips the
    /// `uq_ticket_ticket_number` constraint and surfaces as a sqlx database
    /// error for the api layer to classify.
    pub async fn create(pool: &PgPool, input: &NewTicket) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO ticket
                (customer_id, subject, description, priority, ticket_number,
                 status, ticket_type_id, device_id, due_at, completed_at)
             VALUES ($1, $2, $3, $4, $5, 'open', $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(input.customer_id)
        .bind(&input.subject)
        .bind(&input.description)
        .bind(&input.priority)
        .bind(&input.ticket_number)
        .bind(input.ticket_type_id)
        .bind(input.device_id)
        .bind(input.due_at)
        .bind(input.completed_at)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Update a ticket's editable fields by its number, then return the
    /// re-fetched detail row.
    ///
    /// Two statements without a transaction: a concurrent write may land
    /// between them, and the re-read reflects whatever committed last.
    pub async fn update_by_number(
        pool: &PgPool,
        ticket_number: &str,
        input: &UpdateTicket,
    ) -> Result<Option<TicketDetail>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE ticket SET
                subject = $2,
                status = $3,
                priority = $4,
                due_at = $5,
                description = $6,
                ticket_type_id = $7,
                device_id = $8,
                updated_at = now()
             WHERE ticket_number = $1",
        )
        .bind(ticket_number)
        .bind(&input.subject)
        .bind(&input.status)
        .bind(&input.priority)
        .bind(input.due_at)
        .bind(&input.description)
        .bind(input.ticket_type_id)
        .bind(input.device_id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::detail_by_number(pool, ticket_number).await
    }

    /// Delete a ticket by ID. Tasks and worklogs cascade at the schema
    /// level. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ticket WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    fn detail_query() -> String {
        format!(
            "SELECT {T_COLUMNS},
                ty.name AS ticket_type_name,
                d.brand_model AS device_brand_model,
                d.serial_number AS device_serial_number,
                d.device_type_id AS device_type_id,
                dt.name AS device_type_name,
                d.notes AS device_notes
             FROM ticket t
             LEFT JOIN ticket_type ty ON t.ticket_type_id = ty.id
             LEFT JOIN customer_device d ON t.device_id = d.equipment_id
             LEFT JOIN device_type dt ON d.device_type_id = dt.id"
        )
    }
}
