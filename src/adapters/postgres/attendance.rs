//! PostgreSQL implementations of the attendance-side ports.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::attendance::{
    Attendance, AttendanceStatus, Employee, PayrollPeriod,
};
use crate::domain::foundation::{
    DomainError, EmployeeId, ErrorCode, PayrollPeriodId,
};
use crate::ports::{AttendanceRepository, EmployeeDirectory, PayrollCalendar};

/// PostgreSQL implementation of the AttendanceRepository port.
pub struct PostgresAttendanceRepository {
    pool: PgPool,
}

impl PostgresAttendanceRepository {
    /// Creates a new PostgresAttendanceRepository with the given connection
    /// pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn status_to_string(status: &AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "present",
        AttendanceStatus::Absent => "absent",
        AttendanceStatus::OnLeave => "on_leave",
    }
}

#[async_trait]
impl AttendanceRepository for PostgresAttendanceRepository {
    async fn exists(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
    ) -> Result<bool, DomainError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM attendance
                WHERE employee_id = $1 AND attendance_date = $2
            )
            "#,
        )
        .bind(employee_id.as_str())
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check attendance: {}", e),
            )
        })?;

        Ok(exists)
    }

    async fn save(&self, attendance: &Attendance) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO attendance (
                id, employee_id, employee_name, attendance_date, status, shift, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(attendance.id.as_uuid())
        .bind(attendance.employee_id.as_str())
        .bind(&attendance.employee_name)
        .bind(attendance.date)
        .bind(status_to_string(&attendance.status))
        .bind(&attendance.shift)
        .bind(attendance.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save attendance: {}", e),
            )
        })?;

        Ok(())
    }
}

/// PostgreSQL implementation of the EmployeeDirectory port.
pub struct PostgresEmployeeDirectory {
    pool: PgPool,
}

impl PostgresEmployeeDirectory {
    /// Creates a new PostgresEmployeeDirectory with the given connection
    /// pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an employee.
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: String,
    name: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = DomainError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let id = EmployeeId::new(row.id).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid employee_id: {}", e),
            )
        })?;
        Ok(Employee::new(id, row.name))
    }
}

#[async_trait]
impl EmployeeDirectory for PostgresEmployeeDirectory {
    async fn active_employees(&self) -> Result<Vec<Employee>, DomainError> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM employees
            WHERE status = 'active'
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list active employees: {}", e),
            )
        })?;

        rows.into_iter().map(Employee::try_from).collect()
    }
}

/// PostgreSQL implementation of the PayrollCalendar port.
pub struct PostgresPayrollCalendar {
    pool: PgPool,
}

impl PostgresPayrollCalendar {
    /// Creates a new PostgresPayrollCalendar with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a payroll period.
#[derive(Debug, sqlx::FromRow)]
struct PayrollPeriodRow {
    id: Uuid,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

impl From<PayrollPeriodRow> for PayrollPeriod {
    fn from(row: PayrollPeriodRow) -> Self {
        PayrollPeriod::new(
            PayrollPeriodId::from_uuid(row.id),
            row.name,
            row.start_date,
            row.end_date,
        )
    }
}

#[async_trait]
impl PayrollCalendar for PostgresPayrollCalendar {
    async fn find_period(
        &self,
        id: &PayrollPeriodId,
    ) -> Result<Option<PayrollPeriod>, DomainError> {
        let row: Option<PayrollPeriodRow> = sqlx::query_as(
            r#"
            SELECT id, name, start_date, end_date, created_at
            FROM payroll_periods
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find payroll period: {}", e),
            )
        })?;

        Ok(row.map(PayrollPeriod::from))
    }
}
