//! Project repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::project::Project;

/// Repository port for Project aggregate persistence.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Save a new project.
    async fn save(&self, project: &Project) -> Result<(), DomainError>;

    /// Update an existing project.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, project: &Project) -> Result<(), DomainError>;

    /// Find a project by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;
}
