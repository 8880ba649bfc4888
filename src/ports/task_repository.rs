//! Task repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Progress, ProjectId, TaskId};
use crate::domain::task::Task;

/// Repository port for Task aggregate persistence.
///
/// Implementations are assumed to serialize writes per task.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Save a new task.
    async fn save(&self, task: &Task) -> Result<(), DomainError>;

    /// Update an existing task.
    ///
    /// # Errors
    ///
    /// - `TaskNotFound` if the task doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, task: &Task) -> Result<(), DomainError>;

    /// Find a task by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError>;

    /// Progress values of every task belonging to a project, for averaging.
    ///
    /// Returns an empty list for a project with no tasks.
    async fn list_progress_for_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<Progress>, DomainError>;
}
