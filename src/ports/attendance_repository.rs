//! Attendance repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::attendance::Attendance;
use crate::domain::foundation::{DomainError, EmployeeId};

/// Repository port for attendance record persistence.
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Whether a record already exists for this employee on this date.
    async fn exists(&self, employee_id: &EmployeeId, date: NaiveDate)
        -> Result<bool, DomainError>;

    /// Save a new attendance record.
    async fn save(&self, attendance: &Attendance) -> Result<(), DomainError>;
}
