//! In-memory implementation of TaskRepository.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, Progress, ProjectId, TaskId};
use crate::domain::task::Task;
use crate::ports::TaskRepository;

/// In-memory task store.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: Mutex<HashMap<TaskId, Task>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a task, replacing any existing one with the same id.
    pub fn insert(&self, task: Task) {
        self.tasks.lock().unwrap().insert(task.id, task);
    }

    /// Snapshot of a stored task, for assertions.
    pub fn get(&self, id: &TaskId) -> Option<Task> {
        self.tasks.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        self.tasks.lock().unwrap().insert(task.id, task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> Result<(), DomainError> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.get_mut(&task.id) {
            Some(existing) => {
                *existing = task.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::TaskNotFound,
                format!("Task {} not found", task.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        Ok(self.tasks.lock().unwrap().get(id).cloned())
    }

    async fn list_progress_for_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<Progress>, DomainError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .values()
            .filter(|t| t.project_id.as_ref() == Some(project_id))
            .map(|t| t.progress)
            .collect())
    }
}
