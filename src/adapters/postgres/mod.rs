//! PostgreSQL adapters implementing the repository ports with sqlx.

mod activity;
mod attendance;
mod performance_log;
mod project;
mod task;

pub use activity::PostgresActivityRepository;
pub use attendance::{
    PostgresAttendanceRepository, PostgresEmployeeDirectory, PostgresPayrollCalendar,
};
pub use performance_log::PostgresPerformanceLogRepository;
pub use project::PostgresProjectRepository;
pub use task::PostgresTaskRepository;
