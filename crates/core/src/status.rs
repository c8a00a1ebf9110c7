//! Status vocabularies stored in the database as text.
//!
//! These must match the CHECK constraints in the schema migration. Each enum
//! round-trips through its stored string via `as_str` / `from_str_value`;
//! parsing an unknown value is a validation error listing the accepted set.

use serde::{Deserialize, Serialize};

/// Valid ticket status strings.
pub const VALID_TICKET_STATUSES: &[&str] =
    &["open", "pending", "in_progress", "waiting", "ready", "closed"];

/// Valid task status strings. Stored with the display casing the original
/// data carries ("Not Started", not "not_started").
pub const VALID_TASK_STATUSES: &[&str] =
    &["Not Started", "In Progress", "Completed", "Blocked"];

/// Valid customer lifecycle status strings.
pub const VALID_CUSTOMER_STATUSES: &[&str] = &["lead", "current", "inactive"];

/// Valid ticket priority strings.
pub const VALID_PRIORITIES: &[&str] = &["low", "normal", "high"];

/// Valid device custody status strings.
pub const VALID_CUSTODY_STATUSES: &[&str] =
    &["with_customer", "in_service", "awaiting_pickup", "delivered"];

/// Lifecycle status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Pending,
    InProgress,
    Waiting,
    Ready,
    Closed,
}

impl TicketStatus {
    /// Parse from the stored database string.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "open" => Ok(Self::Open),
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "waiting" => Ok(Self::Waiting),
            "ready" => Ok(Self::Ready),
            "closed" => Ok(Self::Closed),
            _ => Err(format!(
                "Invalid ticket status '{s}'. Must be one of: {}",
                VALID_TICKET_STATUSES.join(", ")
            )),
        }
    }

    /// The stored database string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Waiting => "waiting",
            Self::Ready => "ready",
            Self::Closed => "closed",
        }
    }
}

/// Lifecycle status of a ticket task.
///
/// `Blocked` is reachable from any non-terminal state and reversible;
/// `Completed` does not lock the task against further edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Blocked,
}

impl TaskStatus {
    /// Parse from the stored database string.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "Not Started" => Ok(Self::NotStarted),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "Blocked" => Ok(Self::Blocked),
            _ => Err(format!(
                "Invalid task status '{s}'. Must be one of: {}",
                VALID_TASK_STATUSES.join(", ")
            )),
        }
    }

    /// The stored database string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Blocked => "Blocked",
        }
    }
}

/// Lifecycle status of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    Lead,
    Current,
    Inactive,
}

impl CustomerStatus {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "lead" => Ok(Self::Lead),
            "current" => Ok(Self::Current),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!(
                "Invalid customer status '{s}'. Must be one of: {}",
                VALID_CUSTOMER_STATUSES.join(", ")
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Current => "current",
            Self::Inactive => "inactive",
        }
    }
}

/// Ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Normal,
    High,
}

impl Priority {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            _ => Err(format!(
                "Invalid priority '{s}'. Must be one of: {}",
                VALID_PRIORITIES.join(", ")
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

/// Which party currently physically holds a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustodyStatus {
    WithCustomer,
    InService,
    AwaitingPickup,
    Delivered,
}

impl CustodyStatus {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "with_customer" => Ok(Self::WithCustomer),
            "in_service" => Ok(Self::InService),
            "awaiting_pickup" => Ok(Self::AwaitingPickup),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!(
                "Invalid custody status '{s}'. Must be one of: {}",
                VALID_CUSTODY_STATUSES.join(", ")
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WithCustomer => "with_customer",
            Self::InService => "in_service",
            Self::AwaitingPickup => "awaiting_pickup",
            Self::Delivered => "delivered",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_status_round_trips() {
        for s in VALID_TICKET_STATUSES {
            assert_eq!(TicketStatus::from_str_value(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn task_status_keeps_display_casing() {
        assert_eq!(
            TaskStatus::from_str_value("Not Started").unwrap(),
            TaskStatus::NotStarted
        );
        assert_eq!(TaskStatus::InProgress.as_str(), "In Progress");
    }

    #[test]
    fn unknown_status_lists_accepted_values() {
        let err = TicketStatus::from_str_value("on_hold").unwrap_err();
        assert!(err.contains("on_hold"));
        assert!(err.contains("in_progress"));
    }

    #[test]
    fn task_status_is_case_sensitive() {
        assert!(TaskStatus::from_str_value("completed").is_err());
    }
}
