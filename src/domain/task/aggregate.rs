//! Task aggregate entity.
//!
//! Task progress is recomputed from the summed target and completed
//! quantities of every activity under the task - a full re-aggregation on
//! each change, never an incremental adjustment. Summing quantities (rather
//! than averaging activity progress values) means a large activity moves the
//! task more than a small one.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Progress, ProjectId, Quantity, TaskId, Timestamp};

/// Summed target and completed quantities across a task's activities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QuantityTotals {
    pub target: Quantity,
    pub completed: Quantity,
}

impl QuantityTotals {
    pub fn new(target: Quantity, completed: Quantity) -> Self {
        Self { target, completed }
    }
}

/// Computes task progress from summed activity quantities.
///
/// Zero summed target reads as zero progress.
pub fn progress_from_totals(totals: QuantityTotals) -> Progress {
    if totals.target.is_zero() {
        return Progress::ZERO;
    }
    Progress::new(totals.completed.value() / totals.target.value() * 100.0)
}

/// Task aggregate - a group of activities within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,

    /// Project this task belongs to, if any. An unlinked task ends the
    /// propagation chain at the task level.
    pub project_id: Option<ProjectId>,

    /// Human-readable name.
    pub name: String,

    /// Derived progress percentage over all activities of this task.
    pub progress: Progress,

    /// When the task was created.
    pub created_at: Timestamp,

    /// When the task was last updated.
    pub updated_at: Timestamp,
}

impl Task {
    /// Creates a new task with zero progress.
    pub fn new(id: TaskId, project_id: Option<ProjectId>, name: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            project_id,
            name: name.into(),
            progress: Progress::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces this task's progress with a fresh aggregation over all of
    /// its activities.
    pub fn reaggregate(&mut self, totals: QuantityTotals) {
        self.progress = progress_from_totals(totals);
        self.updated_at = Timestamp::now();
    }
}
