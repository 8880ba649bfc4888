//! In-memory implementations of the attendance-side ports.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::attendance::{Attendance, Employee, PayrollPeriod};
use crate::domain::foundation::{DomainError, EmployeeId, PayrollPeriodId};
use crate::ports::{AttendanceRepository, EmployeeDirectory, PayrollCalendar};

/// In-memory attendance store.
#[derive(Default)]
pub struct InMemoryAttendanceRepository {
    records: Mutex<Vec<Attendance>>,
}

impl InMemoryAttendanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an existing record.
    pub fn insert(&self, attendance: Attendance) {
        self.records.lock().unwrap().push(attendance);
    }

    /// Snapshot of all stored records, for assertions.
    pub fn records(&self) -> Vec<Attendance> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryAttendanceRepository {
    async fn exists(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
    ) -> Result<bool, DomainError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .any(|r| &r.employee_id == employee_id && r.date == date))
    }

    async fn save(&self, attendance: &Attendance) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(attendance.clone());
        Ok(())
    }
}

/// In-memory employee directory.
#[derive(Default)]
pub struct InMemoryEmployeeDirectory {
    employees: Mutex<Vec<Employee>>,
}

impl InMemoryEmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
        }
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn active_employees(&self) -> Result<Vec<Employee>, DomainError> {
        Ok(self.employees.lock().unwrap().clone())
    }
}

/// In-memory payroll calendar.
#[derive(Default)]
pub struct InMemoryPayrollCalendar {
    periods: Mutex<HashMap<PayrollPeriodId, PayrollPeriod>>,
}

impl InMemoryPayrollCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, period: PayrollPeriod) {
        self.periods.lock().unwrap().insert(period.id, period);
    }
}

#[async_trait]
impl PayrollCalendar for InMemoryPayrollCalendar {
    async fn find_period(
        &self,
        id: &PayrollPeriodId,
    ) -> Result<Option<PayrollPeriod>, DomainError> {
        Ok(self.periods.lock().unwrap().get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn exists_matches_employee_and_date() {
        let repo = InMemoryAttendanceRepository::new();
        let employee = Employee::new(EmployeeId::new("EMP-1").unwrap(), "Abebe Kebede");
        repo.insert(Attendance::present(&employee, date(2025, 3, 1)));

        assert!(repo.exists(&employee.id, date(2025, 3, 1)).await.unwrap());
        assert!(!repo.exists(&employee.id, date(2025, 3, 2)).await.unwrap());
        let other = EmployeeId::new("EMP-2").unwrap();
        assert!(!repo.exists(&other, date(2025, 3, 1)).await.unwrap());
    }

    #[tokio::test]
    async fn calendar_finds_seeded_period() {
        let calendar = InMemoryPayrollCalendar::new();
        let period = PayrollPeriod::new(
            PayrollPeriodId::new(),
            "March 2025",
            date(2025, 3, 1),
            date(2025, 3, 31),
        );
        calendar.insert(period.clone());

        let found = calendar.find_period(&period.id).await.unwrap();
        assert_eq!(found, Some(period));
    }
}
