//! Task lifecycle rules: creation defaults and update planning.
//!
//! A task update is one of two shapes:
//!
//! - a **completion recording**: minutes + `Completed` status (+ optional
//!   notes), leaving the descriptive fields alone, or
//! - a **field edit**: description, type, minutes, status, notes.
//!
//! Either way, a transition into `Completed` stamps `completed_at` with the
//! current time. Leaving `Completed` never clears the stamp; it is retained
//! as the last completion timestamp.
//!
//! Planning is pure: callers pass the requested fields and get back the
//! columns to write, or a validation error before anything touches the store.

use crate::error::CoreError;
use crate::status::TaskStatus;
use crate::types::DbId;

/// Requested fields of a task update, as received from the client.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub task_description: Option<String>,
    pub task_type_id: Option<DbId>,
    pub minutes: Option<i32>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// The validated write plan for a task update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskUpdatePlan {
    /// Record time spent and mark the task completed. Descriptive fields
    /// are left untouched.
    RecordCompletion { minutes: i32, notes: Option<String> },
    /// Edit descriptive fields. `status` may be any state, including
    /// `Completed` (in which case the completion stamp applies too).
    EditFields {
        task_description: String,
        task_type_id: Option<DbId>,
        minutes: i32,
        status: TaskStatus,
        notes: Option<String>,
    },
}

impl TaskUpdatePlan {
    /// The status this plan writes.
    pub fn status(&self) -> TaskStatus {
        match self {
            Self::RecordCompletion { .. } => TaskStatus::Completed,
            Self::EditFields { status, .. } => *status,
        }
    }

    /// Whether applying this plan stamps `completed_at`.
    pub fn stamps_completion(&self) -> bool {
        self.status() == TaskStatus::Completed
    }
}

/// Validate a task update request and decide which write shape it takes.
///
/// A non-empty `status` is required; omission is a validation error, not a
/// silent default. A request carrying `minutes` together with a `Completed`
/// status is a completion recording; everything else is a field edit with
/// the original's defaults (empty description, 0 minutes) for omitted
/// fields.
pub fn plan_task_update(update: TaskUpdate) -> Result<TaskUpdatePlan, CoreError> {
    let status_str = match update.status.as_deref() {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err(CoreError::Validation("Status is required".into())),
    };
    let status = TaskStatus::from_str_value(status_str).map_err(CoreError::Validation)?;

    if let Some(minutes) = update.minutes {
        if minutes < 0 {
            return Err(CoreError::Validation(
                "Minutes must be a non-negative integer".into(),
            ));
        }
        if status == TaskStatus::Completed {
            return Ok(TaskUpdatePlan::RecordCompletion {
                minutes,
                notes: update.notes,
            });
        }
    }

    Ok(TaskUpdatePlan::EditFields {
        task_description: update.task_description.unwrap_or_default(),
        task_type_id: update.task_type_id,
        minutes: update.minutes.unwrap_or(0),
        status,
        notes: update.notes,
    })
}

/// Validate a new task: non-empty description, status defaulting to
/// `Not Started`, optional task type.
pub fn validate_new_task(
    description: &str,
    status: Option<&str>,
) -> Result<TaskStatus, CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation("Task description is required".into()));
    }
    match status {
        None => Ok(TaskStatus::NotStarted),
        Some(s) => TaskStatus::from_str_value(s).map_err(CoreError::Validation),
    }
}
