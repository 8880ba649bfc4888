//! Activity aggregate entity.
//!
//! An Activity is the leaf of the progress hierarchy: performance logs are
//! recorded against it, and its completed quantity and progress feed the
//! task- and project-level aggregates above it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActivityId, Progress, Quantity, TaskId, Timestamp};

use super::{Direction, MeasurementType};

/// Activity aggregate - a unit of measurable work within a task.
///
/// # Invariants
///
/// - `completed_qty` is non-negative at all times
/// - `progress` is always derived from `completed_qty` and `target_qty`
///   through the activity's measurement type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier for this activity.
    pub id: ActivityId,

    /// Task this activity belongs to, if any. An unlinked activity ends the
    /// propagation chain at the activity level.
    pub task_id: Option<TaskId>,

    /// Human-readable name.
    pub name: String,

    /// How the completed quantity is measured and read against the target.
    pub measurement_type: MeasurementType,

    /// Nominal quantity to reach.
    pub target_qty: Quantity,

    /// Running aggregate of logged quantities.
    pub completed_qty: Quantity,

    /// Derived progress percentage (may exceed 100).
    pub progress: Progress,

    /// When the activity was created.
    pub created_at: Timestamp,

    /// When the activity was last updated.
    pub updated_at: Timestamp,
}

impl Activity {
    /// Creates a new activity with nothing completed yet.
    pub fn new(
        id: ActivityId,
        task_id: Option<TaskId>,
        name: impl Into<String>,
        measurement_type: MeasurementType,
        target_qty: Quantity,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            task_id,
            name: name.into(),
            measurement_type,
            target_qty,
            completed_qty: Quantity::ZERO,
            progress: Progress::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Folds a logged quantity into this activity and rederives progress.
    ///
    /// The same entry point serves submission (`Direction::Forward`) and
    /// cancellation (`Direction::Reverse`).
    pub fn apply_quantity(&mut self, delta: f64, direction: Direction) {
        self.completed_qty = self
            .measurement_type
            .combine(self.completed_qty, delta, direction);
        self.progress = self
            .measurement_type
            .progress_of(self.completed_qty, self.target_qty);
        self.updated_at = Timestamp::now();
    }
}
