//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod customer_repo;
pub mod device_repo;
pub mod lookup_repo;
pub mod task_repo;
pub mod ticket_repo;
pub mod worklog_repo;

pub use customer_repo::CustomerRepo;
pub use device_repo::DeviceRepo;
pub use lookup_repo::{DeviceTypeRepo, TaskTypeRepo, TicketTypeRepo};
pub use task_repo::TaskRepo;
pub use ticket_repo::TicketRepo;
pub use worklog_repo::WorklogRepo;
