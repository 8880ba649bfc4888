//! PostgreSQL implementation of ActivityRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::activity::{Activity, MeasurementType};
use crate::domain::foundation::{
    ActivityId, DomainError, ErrorCode, Progress, Quantity, TaskId, Timestamp,
};
use crate::domain::task::QuantityTotals;
use crate::ports::ActivityRepository;

/// PostgreSQL implementation of the ActivityRepository port.
pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    /// Creates a new PostgresActivityRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an activity.
#[derive(Debug, sqlx::FromRow)]
struct ActivityRow {
    id: Uuid,
    task_id: Option<Uuid>,
    name: String,
    measurement_type: String,
    target_qty: f64,
    completed_qty: f64,
    progress: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ActivityRow> for Activity {
    type Error = DomainError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        Ok(Activity {
            id: ActivityId::from_uuid(row.id),
            task_id: row.task_id.map(TaskId::from_uuid),
            name: row.name,
            measurement_type: parse_measurement_type(&row.measurement_type)?,
            target_qty: parse_quantity("target_qty", row.target_qty)?,
            completed_qty: parse_quantity("completed_qty", row.completed_qty)?,
            progress: Progress::new(row.progress),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn parse_measurement_type(s: &str) -> Result<MeasurementType, DomainError> {
    match s.to_lowercase().as_str() {
        "increasing" => Ok(MeasurementType::Increasing),
        "decreasing" => Ok(MeasurementType::Decreasing),
        "constant" => Ok(MeasurementType::Constant),
        "unspecified" | "" => Ok(MeasurementType::Unspecified),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid measurement_type value: {}", s),
        )),
    }
}

fn measurement_type_to_string(measurement_type: &MeasurementType) -> &'static str {
    match measurement_type {
        MeasurementType::Increasing => "increasing",
        MeasurementType::Decreasing => "decreasing",
        MeasurementType::Constant => "constant",
        MeasurementType::Unspecified => "unspecified",
    }
}

fn parse_quantity(column: &str, value: f64) -> Result<Quantity, DomainError> {
    Quantity::try_new(value).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid {} value: {}", column, e),
        )
    })
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn save(&self, activity: &Activity) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO activities (
                id, task_id, name, measurement_type, target_qty, completed_qty,
                progress, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(activity.id.as_uuid())
        .bind(activity.task_id.as_ref().map(|id| *id.as_uuid()))
        .bind(&activity.name)
        .bind(measurement_type_to_string(&activity.measurement_type))
        .bind(activity.target_qty.value())
        .bind(activity.completed_qty.value())
        .bind(activity.progress.value())
        .bind(activity.created_at.as_datetime())
        .bind(activity.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save activity: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE activities SET
                task_id = $2,
                name = $3,
                measurement_type = $4,
                target_qty = $5,
                completed_qty = $6,
                progress = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(activity.id.as_uuid())
        .bind(activity.task_id.as_ref().map(|id| *id.as_uuid()))
        .bind(&activity.name)
        .bind(measurement_type_to_string(&activity.measurement_type))
        .bind(activity.target_qty.value())
        .bind(activity.completed_qty.value())
        .bind(activity.progress.value())
        .bind(activity.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update activity: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ActivityNotFound,
                "Activity not found",
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, DomainError> {
        let row: Option<ActivityRow> = sqlx::query_as(
            r#"
            SELECT id, task_id, name, measurement_type, target_qty, completed_qty,
                   progress, created_at, updated_at
            FROM activities
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find activity: {}", e),
            )
        })?;

        row.map(Activity::try_from).transpose()
    }

    async fn sum_for_task(&self, task_id: &TaskId) -> Result<QuantityTotals, DomainError> {
        let (target, completed): (f64, f64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(target_qty), 0), COALESCE(SUM(completed_qty), 0)
            FROM activities
            WHERE task_id = $1
            "#,
        )
        .bind(task_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to sum activities for task: {}", e),
            )
        })?;

        Ok(QuantityTotals::new(
            parse_quantity("target_qty", target)?,
            parse_quantity("completed_qty", completed)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_measurement_type_works_for_all_values() {
        assert_eq!(
            parse_measurement_type("increasing").unwrap(),
            MeasurementType::Increasing
        );
        assert_eq!(
            parse_measurement_type("decreasing").unwrap(),
            MeasurementType::Decreasing
        );
        assert_eq!(
            parse_measurement_type("constant").unwrap(),
            MeasurementType::Constant
        );
        assert_eq!(
            parse_measurement_type("unspecified").unwrap(),
            MeasurementType::Unspecified
        );
        assert_eq!(
            parse_measurement_type("Increasing").unwrap(),
            MeasurementType::Increasing
        );
    }

    #[test]
    fn parse_measurement_type_treats_empty_as_unspecified() {
        assert_eq!(
            parse_measurement_type("").unwrap(),
            MeasurementType::Unspecified
        );
    }

    #[test]
    fn parse_measurement_type_rejects_invalid_values() {
        assert!(parse_measurement_type("sideways").is_err());
    }

    #[test]
    fn roundtrip_measurement_type_conversion() {
        for mt in [
            MeasurementType::Increasing,
            MeasurementType::Decreasing,
            MeasurementType::Constant,
            MeasurementType::Unspecified,
        ] {
            let s = measurement_type_to_string(&mt);
            assert_eq!(parse_measurement_type(s).unwrap(), mt);
        }
    }

    #[test]
    fn parse_quantity_rejects_negative_values() {
        assert!(parse_quantity("target_qty", -1.0).is_err());
        assert!(parse_quantity("target_qty", 10.0).is_ok());
    }
}
