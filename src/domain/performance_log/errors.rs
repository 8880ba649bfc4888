//! Performance-log-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound / ActivityNotFound / TaskNotFound / ProjectNotFound | 404 |
//! | MissingActivityLink | 422 |
//! | InvalidState | 409 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{
    ActivityId, DomainError, PerformanceLogId, ProjectId, TaskId,
};

/// Errors raised while submitting or cancelling a performance log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerformanceLogError {
    /// Performance log was not found.
    NotFound(PerformanceLogId),

    /// The log has no linked activity; the chain cannot run. Raised before
    /// any aggregate is touched.
    MissingActivityLink(PerformanceLogId),

    /// The linked activity does not exist.
    ActivityNotFound(ActivityId),

    /// The activity's task reference is dangling.
    TaskNotFound(TaskId),

    /// The task's project reference is dangling.
    ProjectNotFound(ProjectId),

    /// Invalid lifecycle state for the requested operation.
    InvalidState { current: String, attempted: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl PerformanceLogError {
    pub fn not_found(id: PerformanceLogId) -> Self {
        PerformanceLogError::NotFound(id)
    }

    pub fn missing_activity_link(id: PerformanceLogId) -> Self {
        PerformanceLogError::MissingActivityLink(id)
    }

    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        PerformanceLogError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }
}

impl std::fmt::Display for PerformanceLogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformanceLogError::NotFound(id) => {
                write!(f, "Performance log {} not found", id)
            }
            PerformanceLogError::MissingActivityLink(id) => {
                write!(f, "Performance log {} has no linked project activity", id)
            }
            PerformanceLogError::ActivityNotFound(id) => {
                write!(f, "Project activity {} not found", id)
            }
            PerformanceLogError::TaskNotFound(id) => write!(f, "Task {} not found", id),
            PerformanceLogError::ProjectNotFound(id) => write!(f, "Project {} not found", id),
            PerformanceLogError::InvalidState { current, attempted } => {
                write!(f, "Cannot {} a log in state {}", attempted, current)
            }
            PerformanceLogError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
        }
    }
}

impl std::error::Error for PerformanceLogError {}

impl From<DomainError> for PerformanceLogError {
    fn from(err: DomainError) -> Self {
        PerformanceLogError::Infrastructure(err.to_string())
    }
}
