//! In-memory implementation of ProjectRepository.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

/// In-memory project store.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: Mutex<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a project, replacing any existing one with the same id.
    pub fn insert(&self, project: Project) {
        self.projects.lock().unwrap().insert(project.id, project);
    }

    /// Snapshot of a stored project, for assertions.
    pub fn get(&self, id: &ProjectId) -> Option<Project> {
        self.projects.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save(&self, project: &Project) -> Result<(), DomainError> {
        self.projects
            .lock()
            .unwrap()
            .insert(project.id, project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        let mut projects = self.projects.lock().unwrap();
        match projects.get_mut(&project.id) {
            Some(existing) => {
                *existing = project.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("Project {} not found", project.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        Ok(self.projects.lock().unwrap().get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let repo = InMemoryProjectRepository::new();
        let project = Project::new(ProjectId::new(), "Depot refurbishment");
        repo.save(&project).await.unwrap();
        let found = repo.find_by_id(&project.id).await.unwrap();
        assert_eq!(found, Some(project));
    }

    #[tokio::test]
    async fn update_fails_for_unknown_project() {
        let repo = InMemoryProjectRepository::new();
        let project = Project::new(ProjectId::new(), "Depot refurbishment");
        assert!(repo.update(&project).await.is_err());
    }
}
