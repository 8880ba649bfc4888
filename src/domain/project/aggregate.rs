//! Project aggregate entity.
//!
//! Project completion is the unweighted arithmetic mean of its tasks'
//! progress values. Every task counts equally regardless of size - a
//! deliberate policy, not an approximation, and one that must not be
//! replaced with quantity-weighting.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Progress, ProjectId, Timestamp};

/// Computes project completion as the simple mean of task progress values.
///
/// A project with no tasks reads as zero.
pub fn completion_from_tasks(task_progress: &[Progress]) -> Progress {
    if task_progress.is_empty() {
        return Progress::ZERO;
    }
    let sum: f64 = task_progress.iter().map(|p| p.value()).sum();
    Progress::new(sum / task_progress.len() as f64)
}

/// Project aggregate - the top of the progress hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for this project.
    pub id: ProjectId,

    /// Human-readable name.
    pub name: String,

    /// Derived overall completion percentage.
    pub percent_complete: Progress,

    /// When the project was created.
    pub created_at: Timestamp,

    /// When the project was last updated.
    pub updated_at: Timestamp,
}

impl Project {
    /// Creates a new project with zero completion.
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            name: name.into(),
            percent_complete: Progress::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces overall completion with a fresh mean over all task progress
    /// values.
    pub fn reaggregate(&mut self, task_progress: &[Progress]) {
        self.percent_complete = completion_from_tasks(task_progress);
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_is_simple_mean() {
        let p = completion_from_tasks(&[Progress::new(50.0), Progress::new(100.0)]);
        assert_eq!(p.value(), 75.0);
    }

    #[test]
    fn completion_is_not_quantity_weighted() {
        // Three tasks at {0, 0, 90}: mean is 30 whatever their sizes.
        let p = completion_from_tasks(&[Progress::ZERO, Progress::ZERO, Progress::new(90.0)]);
        assert_eq!(p.value(), 30.0);
    }

    #[test]
    fn no_tasks_reads_zero() {
        assert_eq!(completion_from_tasks(&[]), Progress::ZERO);
    }

    #[test]
    fn mean_over_100_is_kept() {
        let p = completion_from_tasks(&[Progress::new(150.0), Progress::new(250.0)]);
        assert_eq!(p.value(), 200.0);
    }

    #[test]
    fn reaggregate_replaces_completion() {
        let mut project = Project::new(ProjectId::new(), "Warehouse extension");
        project.reaggregate(&[Progress::new(40.0), Progress::new(60.0)]);
        assert_eq!(project.percent_complete.value(), 50.0);

        project.reaggregate(&[]);
        assert_eq!(project.percent_complete, Progress::ZERO);
    }
}
