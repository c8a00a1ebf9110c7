//! Repository for the `customer` table, including the derived per-customer
//! ticket aggregation.

use orca_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{
    Customer, CustomerTicketCountsRow, NewCustomer, UpdateCustomer,
};

/// Column list for customer queries.
const COLUMNS: &str = "id, first_name, last_name, email, unit, street, city, \
                       postal_code, phone_number, status, created_at, updated_at";

/// Provides CRUD operations and the ticket-count aggregation for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// List all customers with their live ticket counts, bucketed by status.
    ///
    /// Computed at read time with grouped conditional counts; a customer
    /// with no tickets comes back with every count at zero thanks to the
    /// LEFT JOIN + COUNT(t.id). `open` tickets raise the total without
    /// landing in a bucket.
    pub async fn list_with_ticket_counts(
        pool: &PgPool,
    ) -> Result<Vec<CustomerTicketCountsRow>, sqlx::Error> {
        sqlx::query_as::<_, CustomerTicketCountsRow>(
            "SELECT c.id, c.first_name, c.last_name, c.email, c.status,
                COUNT(t.id) AS total_tickets,
                COUNT(t.id) FILTER (WHERE t.status = 'pending')     AS pending_tickets,
                COUNT(t.id) FILTER (WHERE t.status = 'waiting')     AS waiting_tickets,
                COUNT(t.id) FILTER (WHERE t.status = 'in_progress') AS in_progress_tickets,
                COUNT(t.id) FILTER (WHERE t.status = 'closed')      AS closed_tickets,
                COUNT(t.id) FILTER (WHERE t.status = 'ready')       AS ready_tickets
             FROM customer c
             LEFT JOIN ticket t ON t.customer_id = c.id
             GROUP BY c.id, c.first_name, c.last_name, c.email, c.status
             ORDER BY c.last_name ASC, c.first_name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Find a customer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customer WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customer
                (first_name, last_name, email, unit, street, city, postal_code,
                 phone_number, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.unit)
            .bind(&input.street)
            .bind(&input.city)
            .bind(&input.postal_code)
            .bind(&input.phone_number)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Update a customer by ID, returning the updated row. Omitted fields
    /// keep their current values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customer SET
                first_name   = COALESCE($2, first_name),
                last_name    = COALESCE($3, last_name),
                email        = COALESCE($4, email),
                phone_number = COALESCE($5, phone_number),
                status       = COALESCE($6, status),
                unit         = COALESCE($7, unit),
                street       = COALESCE($8, street),
                city         = COALESCE($9, city),
                postal_code  = COALESCE($10, postal_code),
                updated_at   = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(&input.status)
            .bind(&input.unit)
            .bind(&input.street)
            .bind(&input.city)
            .bind(&input.postal_code)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer by ID. Tickets (and their tasks and worklogs)
    /// cascade at the schema level. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
