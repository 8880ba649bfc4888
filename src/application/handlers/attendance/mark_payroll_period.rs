//! MarkPayrollPeriodHandler - bulk attendance marking for a payroll period.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::attendance::{Attendance, AttendanceError};
use crate::domain::foundation::PayrollPeriodId;
use crate::ports::{AttendanceRepository, EmployeeDirectory, PayrollCalendar};

/// Command to mark every active employee present for a payroll period.
#[derive(Debug, Clone)]
pub struct MarkPayrollPeriodCommand {
    pub period_id: PayrollPeriodId,
}

/// Result of a completed marking run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkPayrollPeriodResult {
    /// Records inserted by this run.
    pub records_created: u32,
    /// Pairs skipped because a record already existed.
    pub records_skipped: u32,
    pub summary: String,
}

/// Handler for the bulk attendance-marking job.
///
/// Iterates every day of the period for every active employee and inserts a
/// Present record on the default shift where none exists. Existing records
/// are skipped, so the job is idempotent and safe to re-run after a partial
/// failure. Inserts are not atomic across the run; a failure keeps the
/// records already written.
pub struct MarkPayrollPeriodHandler {
    calendar: Arc<dyn PayrollCalendar>,
    directory: Arc<dyn EmployeeDirectory>,
    attendance: Arc<dyn AttendanceRepository>,
}

impl MarkPayrollPeriodHandler {
    pub fn new(
        calendar: Arc<dyn PayrollCalendar>,
        directory: Arc<dyn EmployeeDirectory>,
        attendance: Arc<dyn AttendanceRepository>,
    ) -> Self {
        Self {
            calendar,
            directory,
            attendance,
        }
    }

    pub async fn handle(
        &self,
        cmd: MarkPayrollPeriodCommand,
    ) -> Result<MarkPayrollPeriodResult, AttendanceError> {
        let period = self
            .calendar
            .find_period(&cmd.period_id)
            .await
            .map_err(|err| AttendanceError::infrastructure(err, 0))?
            .ok_or_else(|| AttendanceError::period_not_found(cmd.period_id))?;
        let employees = self
            .directory
            .active_employees()
            .await
            .map_err(|err| AttendanceError::infrastructure(err, 0))?;

        let mut created: u32 = 0;
        let mut skipped: u32 = 0;
        for date in period.days() {
            for employee in &employees {
                let exists = self
                    .attendance
                    .exists(&employee.id, date)
                    .await
                    .map_err(|err| self.abort(err, created))?;
                if exists {
                    skipped += 1;
                    continue;
                }
                let record = Attendance::present(employee, date);
                self.attendance
                    .save(&record)
                    .await
                    .map_err(|err| self.abort(err, created))?;
                created += 1;
            }
        }

        let summary = format!(
            "Marked attendance for period {}: {} created, {} skipped",
            period.name, created, skipped
        );
        info!(
            period = %period.id,
            created,
            skipped,
            employees = employees.len(),
            "attendance marking complete"
        );

        Ok(MarkPayrollPeriodResult {
            records_created: created,
            records_skipped: skipped,
            summary,
        })
    }

    fn abort(
        &self,
        err: crate::domain::foundation::DomainError,
        records_created: u32,
    ) -> AttendanceError {
        error!(
            %err,
            records_created,
            "attendance marking aborted; created records are kept"
        );
        AttendanceError::infrastructure(err, records_created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryAttendanceRepository, InMemoryEmployeeDirectory, InMemoryPayrollCalendar,
    };
    use crate::domain::attendance::{AttendanceStatus, Employee, PayrollPeriod, DEFAULT_SHIFT};
    use crate::domain::foundation::{DomainError, EmployeeId, ErrorCode};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(id: &str, name: &str) -> Employee {
        Employee::new(EmployeeId::new(id).unwrap(), name)
    }

    fn period(start: NaiveDate, end: NaiveDate) -> PayrollPeriod {
        PayrollPeriod::new(PayrollPeriodId::new(), "March 2025", start, end)
    }

    fn handler(
        calendar: Arc<InMemoryPayrollCalendar>,
        directory: Arc<InMemoryEmployeeDirectory>,
        attendance: Arc<dyn AttendanceRepository>,
    ) -> MarkPayrollPeriodHandler {
        MarkPayrollPeriodHandler::new(calendar, directory, attendance)
    }

    #[tokio::test]
    async fn marks_every_employee_for_every_day() {
        let calendar = Arc::new(InMemoryPayrollCalendar::new());
        let p = period(date(2025, 3, 1), date(2025, 3, 3));
        let period_id = p.id;
        calendar.insert(p);
        let directory = Arc::new(InMemoryEmployeeDirectory::with_employees(vec![
            employee("EMP-1", "Abebe Kebede"),
            employee("EMP-2", "Sara Tesfaye"),
        ]));
        let attendance = Arc::new(InMemoryAttendanceRepository::new());

        let result = handler(calendar, directory, attendance.clone())
            .handle(MarkPayrollPeriodCommand { period_id })
            .await
            .unwrap();

        assert_eq!(result.records_created, 6);
        assert_eq!(result.records_skipped, 0);
        let records = attendance.records();
        assert_eq!(records.len(), 6);
        assert!(records
            .iter()
            .all(|r| r.status == AttendanceStatus::Present && r.shift == DEFAULT_SHIFT));
    }

    #[tokio::test]
    async fn skips_existing_records() {
        let calendar = Arc::new(InMemoryPayrollCalendar::new());
        let p = period(date(2025, 3, 1), date(2025, 3, 2));
        let period_id = p.id;
        calendar.insert(p);
        let emp = employee("EMP-1", "Abebe Kebede");
        let directory = Arc::new(InMemoryEmployeeDirectory::with_employees(vec![emp.clone()]));
        let attendance = Arc::new(InMemoryAttendanceRepository::new());
        attendance.insert(Attendance::present(&emp, date(2025, 3, 1)));

        let result = handler(calendar, directory, attendance.clone())
            .handle(MarkPayrollPeriodCommand { period_id })
            .await
            .unwrap();

        assert_eq!(result.records_created, 1);
        assert_eq!(result.records_skipped, 1);
        assert_eq!(attendance.records().len(), 2);
    }

    #[tokio::test]
    async fn rerun_creates_nothing_new() {
        let calendar = Arc::new(InMemoryPayrollCalendar::new());
        let p = period(date(2025, 3, 1), date(2025, 3, 5));
        let period_id = p.id;
        calendar.insert(p);
        let directory = Arc::new(InMemoryEmployeeDirectory::with_employees(vec![employee(
            "EMP-1",
            "Abebe Kebede",
        )]));
        let attendance = Arc::new(InMemoryAttendanceRepository::new());
        let calendar2 = calendar.clone();
        let directory2 = directory.clone();

        handler(calendar, directory, attendance.clone())
            .handle(MarkPayrollPeriodCommand { period_id })
            .await
            .unwrap();
        let second = handler(calendar2, directory2, attendance.clone())
            .handle(MarkPayrollPeriodCommand { period_id })
            .await
            .unwrap();

        assert_eq!(second.records_created, 0);
        assert_eq!(second.records_skipped, 5);
        assert_eq!(attendance.records().len(), 5);
    }

    #[tokio::test]
    async fn unknown_period_fails() {
        let calendar = Arc::new(InMemoryPayrollCalendar::new());
        let directory = Arc::new(InMemoryEmployeeDirectory::new());
        let attendance = Arc::new(InMemoryAttendanceRepository::new());

        let result = handler(calendar, directory, attendance)
            .handle(MarkPayrollPeriodCommand {
                period_id: PayrollPeriodId::new(),
            })
            .await;

        assert!(matches!(result, Err(AttendanceError::PeriodNotFound(_))));
    }

    #[tokio::test]
    async fn summary_names_the_period() {
        let calendar = Arc::new(InMemoryPayrollCalendar::new());
        let p = period(date(2025, 3, 1), date(2025, 3, 1));
        let period_id = p.id;
        calendar.insert(p);
        let directory = Arc::new(InMemoryEmployeeDirectory::with_employees(vec![employee(
            "EMP-1",
            "Abebe Kebede",
        )]));
        let attendance = Arc::new(InMemoryAttendanceRepository::new());

        let result = handler(calendar, directory, attendance)
            .handle(MarkPayrollPeriodCommand { period_id })
            .await
            .unwrap();

        assert_eq!(
            result.summary,
            "Marked attendance for period March 2025: 1 created, 0 skipped"
        );
    }

    /// Fails every save after the first `allow` successes.
    struct FlakyAttendanceRepository {
        inner: InMemoryAttendanceRepository,
        allow: u32,
        saves: AtomicU32,
    }

    #[async_trait]
    impl AttendanceRepository for FlakyAttendanceRepository {
        async fn exists(
            &self,
            employee_id: &EmployeeId,
            date: NaiveDate,
        ) -> Result<bool, DomainError> {
            self.inner.exists(employee_id, date).await
        }

        async fn save(&self, record: &Attendance) -> Result<(), DomainError> {
            if self.saves.fetch_add(1, Ordering::SeqCst) >= self.allow {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "connection reset",
                ));
            }
            self.inner.save(record).await
        }
    }

    #[tokio::test]
    async fn failure_mid_run_reports_partial_progress() {
        let calendar = Arc::new(InMemoryPayrollCalendar::new());
        let p = period(date(2025, 3, 1), date(2025, 3, 4));
        let period_id = p.id;
        calendar.insert(p);
        let directory = Arc::new(InMemoryEmployeeDirectory::with_employees(vec![employee(
            "EMP-1",
            "Abebe Kebede",
        )]));
        let attendance = Arc::new(FlakyAttendanceRepository {
            inner: InMemoryAttendanceRepository::new(),
            allow: 2,
            saves: AtomicU32::new(0),
        });

        let result = handler(calendar, directory, attendance.clone())
            .handle(MarkPayrollPeriodCommand { period_id })
            .await;

        assert!(matches!(
            result,
            Err(AttendanceError::Infrastructure {
                records_created: 2,
                ..
            })
        ));
        // The two records written before the failure are kept.
        assert_eq!(attendance.inner.records().len(), 2);
    }
}
