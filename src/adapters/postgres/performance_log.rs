//! PostgreSQL implementation of PerformanceLogRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    ActivityId, DomainError, ErrorCode, PerformanceLogId, Progress, Timestamp,
};
use crate::domain::performance_log::{PerformanceLog, PerformanceLogStatus};
use crate::ports::PerformanceLogRepository;

/// PostgreSQL implementation of the PerformanceLogRepository port.
pub struct PostgresPerformanceLogRepository {
    pool: PgPool,
}

impl PostgresPerformanceLogRepository {
    /// Creates a new PostgresPerformanceLogRepository with the given
    /// connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a performance log.
#[derive(Debug, sqlx::FromRow)]
struct PerformanceLogRow {
    id: Uuid,
    activity_id: Option<Uuid>,
    log_date: NaiveDate,
    qty_completed: f64,
    performance_to_date: Option<f64>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PerformanceLogRow> for PerformanceLog {
    type Error = DomainError;

    fn try_from(row: PerformanceLogRow) -> Result<Self, Self::Error> {
        Ok(PerformanceLog {
            id: PerformanceLogId::from_uuid(row.id),
            activity_id: row.activity_id.map(ActivityId::from_uuid),
            log_date: row.log_date,
            qty_completed: row.qty_completed,
            performance_to_date: row.performance_to_date.map(Progress::new),
            status: parse_status(&row.status)?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn parse_status(s: &str) -> Result<PerformanceLogStatus, DomainError> {
    match s.to_lowercase().as_str() {
        "draft" => Ok(PerformanceLogStatus::Draft),
        "submitted" => Ok(PerformanceLogStatus::Submitted),
        "cancelled" => Ok(PerformanceLogStatus::Cancelled),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid status value: {}", s),
        )),
    }
}

fn status_to_string(status: &PerformanceLogStatus) -> &'static str {
    match status {
        PerformanceLogStatus::Draft => "draft",
        PerformanceLogStatus::Submitted => "submitted",
        PerformanceLogStatus::Cancelled => "cancelled",
    }
}

#[async_trait]
impl PerformanceLogRepository for PostgresPerformanceLogRepository {
    async fn save(&self, log: &PerformanceLog) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO performance_logs (
                id, activity_id, log_date, qty_completed, performance_to_date,
                status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(log.id.as_uuid())
        .bind(log.activity_id.as_ref().map(|id| *id.as_uuid()))
        .bind(log.log_date)
        .bind(log.qty_completed)
        .bind(log.performance_to_date.map(|p| p.value()))
        .bind(status_to_string(&log.status))
        .bind(log.created_at.as_datetime())
        .bind(log.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save performance log: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, log: &PerformanceLog) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE performance_logs SET
                activity_id = $2,
                log_date = $3,
                qty_completed = $4,
                performance_to_date = $5,
                status = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(log.id.as_uuid())
        .bind(log.activity_id.as_ref().map(|id| *id.as_uuid()))
        .bind(log.log_date)
        .bind(log.qty_completed)
        .bind(log.performance_to_date.map(|p| p.value()))
        .bind(status_to_string(&log.status))
        .bind(log.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update performance log: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PerformanceLogNotFound,
                "Performance log not found",
            ));
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &PerformanceLogId,
    ) -> Result<Option<PerformanceLog>, DomainError> {
        let row: Option<PerformanceLogRow> = sqlx::query_as(
            r#"
            SELECT id, activity_id, log_date, qty_completed, performance_to_date,
                   status, created_at, updated_at
            FROM performance_logs
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find performance log: {}", e),
            )
        })?;

        row.map(PerformanceLog::try_from).transpose()
    }

    async fn set_performance_to_date(
        &self,
        id: &PerformanceLogId,
        progress: Progress,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE performance_logs SET
                performance_to_date = $2,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(progress.value())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to set performance_to_date: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PerformanceLogNotFound,
                "Performance log not found",
            ));
        }

        Ok(())
    }
}
