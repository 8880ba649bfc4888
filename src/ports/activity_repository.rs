//! Activity repository port.
//!
//! Besides plain aggregate persistence this port carries the aggregate query
//! the task level depends on: summed target and completed quantities across
//! every activity of a task. Re-reading all siblings on each change avoids
//! drift and tolerates out-of-band edits, at the cost of an
//! O(activities-per-task) read per log submission or cancellation.
//!
//! Implementations are assumed to serialize writes per activity; the
//! read-mutate-save cycle is not protected against concurrent writers.

use async_trait::async_trait;

use crate::domain::activity::Activity;
use crate::domain::foundation::{ActivityId, DomainError, TaskId};
use crate::domain::task::QuantityTotals;

/// Repository port for Activity aggregate persistence.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Save a new activity.
    async fn save(&self, activity: &Activity) -> Result<(), DomainError>;

    /// Update an existing activity.
    ///
    /// # Errors
    ///
    /// - `ActivityNotFound` if the activity doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, activity: &Activity) -> Result<(), DomainError>;

    /// Find an activity by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, DomainError>;

    /// Sum target and completed quantities over all activities of a task.
    ///
    /// Returns zero totals for a task with no activities.
    async fn sum_for_task(&self, task_id: &TaskId) -> Result<QuantityTotals, DomainError>;
}
