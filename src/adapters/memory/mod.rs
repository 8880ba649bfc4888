//! In-memory adapters for every port.
//!
//! Used by tests and local development; the single mutex per store provides
//! the write serialization the ports assume.

mod activity;
mod attendance;
mod performance_log;
mod project;
mod task;

pub use activity::InMemoryActivityRepository;
pub use attendance::{
    InMemoryAttendanceRepository, InMemoryEmployeeDirectory, InMemoryPayrollCalendar,
};
pub use performance_log::InMemoryPerformanceLogRepository;
pub use project::InMemoryProjectRepository;
pub use task::InMemoryTaskRepository;
