//! Customer device models.

use orca_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `customer_device` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomerDevice {
    pub equipment_id: DbId,
    pub customer_id: DbId,
    pub device_type_id: DbId,
    pub brand_model: Option<String>,
    pub serial_number: Option<String>,
    pub first_service_date: Option<Timestamp>,
    pub last_service_date: Option<Timestamp>,
    pub notes: Option<String>,
    pub custody_status: String,
    pub custody_changed_at: Timestamp,
}

/// Device row joined with its type name for listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DeviceWithTypeName {
    pub equipment_id: DbId,
    pub customer_id: DbId,
    pub device_type_id: DbId,
    pub brand_model: Option<String>,
    pub serial_number: Option<String>,
    pub first_service_date: Option<Timestamp>,
    pub last_service_date: Option<Timestamp>,
    pub notes: Option<String>,
    pub custody_status: String,
    pub custody_changed_at: Timestamp,
    pub device_type_name: Option<String>,
}

/// DTO for registering a device under a customer.
#[derive(Debug, Deserialize)]
pub struct CreateDevice {
    pub device_type_id: DbId,
    pub brand_model: Option<String>,
    pub serial_number: Option<String>,
    pub first_service_date: Option<Timestamp>,
    pub last_service_date: Option<Timestamp>,
    pub notes: Option<String>,
}

/// DTO for a partial device update. A custody change stamps
/// `custody_changed_at` in the repository.
#[derive(Debug, Deserialize)]
pub struct UpdateDevice {
    pub device_type_id: Option<DbId>,
    pub brand_model: Option<String>,
    pub serial_number: Option<String>,
    pub first_service_date: Option<Timestamp>,
    pub last_service_date: Option<Timestamp>,
    pub notes: Option<String>,
    pub custody_status: Option<String>,
}
