//! Shared value objects and error types for the domain layer.

mod errors;
mod ids;
mod progress;
mod quantity;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    ActivityId, AttendanceId, EmployeeId, PayrollPeriodId, PerformanceLogId, ProjectId, TaskId,
};
pub use progress::Progress;
pub use quantity::Quantity;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
