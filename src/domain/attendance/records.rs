//! Attendance records, employees, and payroll periods.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AttendanceId, EmployeeId, PayrollPeriodId, Timestamp,
};

/// Shift assigned when attendance is bulk-marked.
pub const DEFAULT_SHIFT: &str = "Regular Day Shift";

/// Attendance status for a single (employee, date) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    OnLeave,
}

/// An active employee as resolved from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A payroll period with an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    pub id: PayrollPeriodId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl PayrollPeriod {
    pub fn new(
        id: PayrollPeriodId,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start_date,
            end_date,
        }
    }

    /// Every calendar day in the period, both endpoints included. Empty when
    /// the end date precedes the start date.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = self.start_date;
        while current <= self.end_date {
            days.push(current);
            current += Duration::days(1);
        }
        days
    }
}

/// One attendance record for an employee on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: AttendanceId,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub shift: String,
    pub created_at: Timestamp,
}

impl Attendance {
    /// Creates a Present record on the default shift, as the bulk-marking
    /// job does.
    pub fn present(employee: &Employee, date: NaiveDate) -> Self {
        Self {
            id: AttendanceId::new(),
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            date,
            status: AttendanceStatus::Present,
            shift: DEFAULT_SHIFT.to_string(),
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn period_days_are_inclusive() {
        let period = PayrollPeriod::new(
            PayrollPeriodId::new(),
            "March 2025",
            date(2025, 3, 1),
            date(2025, 3, 3),
        );
        assert_eq!(
            period.days(),
            vec![date(2025, 3, 1), date(2025, 3, 2), date(2025, 3, 3)]
        );
    }

    #[test]
    fn single_day_period_has_one_day() {
        let period = PayrollPeriod::new(
            PayrollPeriodId::new(),
            "One day",
            date(2025, 3, 1),
            date(2025, 3, 1),
        );
        assert_eq!(period.days().len(), 1);
    }

    #[test]
    fn inverted_period_has_no_days() {
        let period = PayrollPeriod::new(
            PayrollPeriodId::new(),
            "Inverted",
            date(2025, 3, 10),
            date(2025, 3, 1),
        );
        assert!(period.days().is_empty());
    }

    #[test]
    fn present_record_uses_default_shift() {
        let employee = Employee::new(EmployeeId::new("EMP-1").unwrap(), "Abebe Kebede");
        let record = Attendance::present(&employee, date(2025, 3, 1));
        assert_eq!(record.status, AttendanceStatus::Present);
        assert_eq!(record.shift, DEFAULT_SHIFT);
        assert_eq!(record.employee_name, "Abebe Kebede");
    }

    #[test]
    fn attendance_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
    }
}
