//! Persistence layer for the Orca CRM backend.
//!
//! Pool construction, embedded migrations, row models, and repositories.
//! Repositories are zero-sized structs whose async methods take `&PgPool`;
//! a connection is acquired per statement and returned to the pool on every
//! exit path, error paths included.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Upper bound on concurrent database connections. Sized for the
/// single-operator deployment this service targets.
const MAX_CONNECTIONS: u32 = 10;

/// Create a bounded connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations embedded from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
