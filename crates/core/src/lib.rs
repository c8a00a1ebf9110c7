//! Domain rules for the Orca CRM backend.
//!
//! This crate contains no database or HTTP dependencies. It provides the
//! status vocabularies, ticket number generation, task lifecycle planning,
//! ticket aggregation, and due-date computation that the `db` and `api`
//! crates build on. Anything that touches a pool or a request lives there,
//! not here.

pub mod due;
pub mod error;
pub mod status;
pub mod task_lifecycle;
pub mod ticket_counts;
pub mod ticket_number;
pub mod types;
