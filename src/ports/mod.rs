//! Ports: trait contracts between the application layer and adapters.

mod activity_repository;
mod attendance_repository;
mod employee_directory;
mod payroll_calendar;
mod performance_log_repository;
mod project_repository;
mod task_repository;

pub use activity_repository::ActivityRepository;
pub use attendance_repository::AttendanceRepository;
pub use employee_directory::EmployeeDirectory;
pub use payroll_calendar::PayrollCalendar;
pub use performance_log_repository::PerformanceLogRepository;
pub use project_repository::ProjectRepository;
pub use task_repository::TaskRepository;
