//! Attendance-marking error types.

use crate::domain::foundation::{DomainError, PayrollPeriodId};

/// Errors raised by the bulk attendance-marking job.
///
/// The job is not atomic: records inserted before a failure are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    /// Payroll period was not found.
    PeriodNotFound(PayrollPeriodId),

    /// Infrastructure error. Carries the count of records already created
    /// before the failure, since those are not rolled back.
    Infrastructure {
        message: String,
        records_created: u32,
    },
}

impl AttendanceError {
    pub fn period_not_found(id: PayrollPeriodId) -> Self {
        AttendanceError::PeriodNotFound(id)
    }

    pub fn infrastructure(err: DomainError, records_created: u32) -> Self {
        AttendanceError::Infrastructure {
            message: err.to_string(),
            records_created,
        }
    }
}

impl std::fmt::Display for AttendanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceError::PeriodNotFound(id) => {
                write!(f, "Payroll period {} not found", id)
            }
            AttendanceError::Infrastructure {
                message,
                records_created,
            } => write!(
                f,
                "Failed to mark attendance after {} records: {}",
                records_created, message
            ),
        }
    }
}

impl std::error::Error for AttendanceError {}
