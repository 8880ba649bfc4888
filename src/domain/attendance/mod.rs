//! Attendance records and payroll periods for the bulk-marking job.

mod errors;
mod records;

pub use errors::AttendanceError;
pub use records::{Attendance, AttendanceStatus, Employee, PayrollPeriod, DEFAULT_SHIFT};
