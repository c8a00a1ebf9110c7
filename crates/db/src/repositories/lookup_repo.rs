//! Repositories for the lookup dictionaries. Read-only; one list method
//! each, ordered by name.

use sqlx::PgPool;

use crate::models::lookup::{DeviceType, TaskType, TicketType};

pub struct TicketTypeRepo;

impl TicketTypeRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<TicketType>, sqlx::Error> {
        sqlx::query_as::<_, TicketType>(
            "SELECT id, name, description FROM ticket_type ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
    }
}

pub struct TaskTypeRepo;

impl TaskTypeRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<TaskType>, sqlx::Error> {
        sqlx::query_as::<_, TaskType>(
            "SELECT id, name, description FROM task_type ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
    }
}

pub struct DeviceTypeRepo;

impl DeviceTypeRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<DeviceType>, sqlx::Error> {
        sqlx::query_as::<_, DeviceType>("SELECT id, name FROM device_type ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }
}
