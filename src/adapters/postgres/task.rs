//! PostgreSQL implementation of TaskRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, ErrorCode, Progress, ProjectId, TaskId, Timestamp,
};
use crate::domain::task::Task;
use crate::ports::TaskRepository;

/// PostgreSQL implementation of the TaskRepository port.
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new PostgresTaskRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a task.
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    project_id: Option<Uuid>,
    name: String,
    progress: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: TaskId::from_uuid(row.id),
            project_id: row.project_id.map(ProjectId::from_uuid),
            name: row.name,
            progress: Progress::new(row.progress),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, project_id, name, progress, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(task.id.as_uuid())
        .bind(task.project_id.as_ref().map(|id| *id.as_uuid()))
        .bind(&task.name)
        .bind(task.progress.value())
        .bind(task.created_at.as_datetime())
        .bind(task.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to save task: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, task: &Task) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks SET
                project_id = $2,
                name = $3,
                progress = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(task.id.as_uuid())
        .bind(task.project_id.as_ref().map(|id| *id.as_uuid()))
        .bind(&task.name)
        .bind(task.progress.value())
        .bind(task.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to update task: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::TaskNotFound, "Task not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        let row: Option<TaskRow> = sqlx::query_as(
            r#"
            SELECT id, project_id, name, progress, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find task: {}", e))
        })?;

        Ok(row.map(Task::from))
    }

    async fn list_progress_for_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<Progress>, DomainError> {
        let values: Vec<f64> = sqlx::query_scalar(
            r#"
            SELECT progress
            FROM tasks
            WHERE project_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(project_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list task progress: {}", e),
            )
        })?;

        Ok(values.into_iter().map(Progress::new).collect())
    }
}
