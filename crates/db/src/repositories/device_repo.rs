//! Repository for the `customer_device` table.

use orca_core::types::DbId;
use sqlx::PgPool;

use crate::models::device::{CreateDevice, CustomerDevice, DeviceWithTypeName, UpdateDevice};

/// Column list for device queries.
const COLUMNS: &str = "equipment_id, customer_id, device_type_id, brand_model, \
                       serial_number, first_service_date, last_service_date, notes, \
                       custody_status, custody_changed_at";

/// Provides CRUD operations for customer devices.
pub struct DeviceRepo;

impl DeviceRepo {
    /// List a customer's devices with their type names.
    pub async fn list_by_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<DeviceWithTypeName>, sqlx::Error> {
        sqlx::query_as::<_, DeviceWithTypeName>(
            "SELECT d.equipment_id, d.customer_id, d.device_type_id, d.brand_model,
                d.serial_number, d.first_service_date, d.last_service_date, d.notes,
                d.custody_status, d.custody_changed_at,
                t.name AS device_type_name
             FROM customer_device d
             LEFT JOIN device_type t ON d.device_type_id = t.id
             WHERE d.customer_id = $1
             ORDER BY d.equipment_id ASC",
        )
        .bind(customer_id)
        .fetch_all(pool)
        .await
    }

    /// Find a device by its equipment ID.
    pub async fn find_by_id(
        pool: &PgPool,
        equipment_id: DbId,
    ) -> Result<Option<CustomerDevice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customer_device WHERE equipment_id = $1");
        sqlx::query_as::<_, CustomerDevice>(&query)
            .bind(equipment_id)
            .fetch_optional(pool)
            .await
    }

    /// Register a device under a customer, returning its equipment ID.
    /// Custody starts at `with_customer`.
    pub async fn create(
        pool: &PgPool,
        customer_id: DbId,
        input: &CreateDevice,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO customer_device
                (customer_id, device_type_id, brand_model, serial_number,
                 first_service_date, last_service_date, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING equipment_id",
        )
        .bind(customer_id)
        .bind(input.device_type_id)
        .bind(&input.brand_model)
        .bind(&input.serial_number)
        .bind(input.first_service_date)
        .bind(input.last_service_date)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Update a device by equipment ID, returning the updated row. Omitted
    /// fields keep their current values; a custody change (a provided
    /// custody_status different from the stored one) stamps
    /// `custody_changed_at`.
    pub async fn update(
        pool: &PgPool,
        equipment_id: DbId,
        input: &UpdateDevice,
    ) -> Result<Option<CustomerDevice>, sqlx::Error> {
        let query = format!(
            "UPDATE customer_device SET
                device_type_id     = COALESCE($2, device_type_id),
                brand_model        = COALESCE($3, brand_model),
                serial_number      = COALESCE($4, serial_number),
                first_service_date = COALESCE($5, first_service_date),
                last_service_date  = COALESCE($6, last_service_date),
                notes              = COALESCE($7, notes),
                custody_changed_at = CASE
                    WHEN $8 IS NOT NULL AND $8 IS DISTINCT FROM custody_status THEN now()
                    ELSE custody_changed_at
                END,
                custody_status     = COALESCE($8, custody_status)
             WHERE equipment_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomerDevice>(&query)
            .bind(equipment_id)
            .bind(input.device_type_id)
            .bind(&input.brand_model)
            .bind(&input.serial_number)
            .bind(input.first_service_date)
            .bind(input.last_service_date)
            .bind(&input.notes)
            .bind(&input.custody_status)
            .fetch_optional(pool)
            .await
    }
}
