//! Upward propagation of a logged quantity through the hierarchy.
//!
//! One parametrized chain serves both submission (Forward) and cancellation
//! (Reverse): activity first, then the owning task, then the owning project,
//! each stage skipped when the parent link is absent. The three writes are a
//! non-atomic saga - a failure between stages leaves the levels already
//! written in place. There is no compensation; the surrounding persistence
//! layer is trusted for per-write durability only.

use std::sync::Arc;

use tracing::debug;

use crate::domain::activity::Direction;
use crate::domain::foundation::{ActivityId, Progress};
use crate::domain::performance_log::PerformanceLogError;
use crate::ports::{ActivityRepository, ProjectRepository, TaskRepository};

/// Applies `delta` to the activity and re-aggregates its ancestors.
///
/// Returns the activity's progress as re-read after the chain completes;
/// this is the value mirrored onto the performance log.
pub(super) async fn propagate_quantity(
    activities: &Arc<dyn ActivityRepository>,
    tasks: &Arc<dyn TaskRepository>,
    projects: &Arc<dyn ProjectRepository>,
    activity_id: ActivityId,
    delta: f64,
    direction: Direction,
) -> Result<Progress, PerformanceLogError> {
    // Stage 1: the activity itself.
    let mut activity = activities
        .find_by_id(&activity_id)
        .await?
        .ok_or(PerformanceLogError::ActivityNotFound(activity_id))?;
    activity.apply_quantity(delta, direction);
    activities.update(&activity).await?;
    debug!(
        activity = %activity.id,
        completed = activity.completed_qty.value(),
        progress = activity.progress.value(),
        "activity aggregate updated"
    );

    // Stage 2: the owning task, re-aggregated over all sibling activities.
    if let Some(task_id) = activity.task_id {
        let mut task = tasks
            .find_by_id(&task_id)
            .await?
            .ok_or(PerformanceLogError::TaskNotFound(task_id))?;
        let totals = activities.sum_for_task(&task_id).await?;
        task.reaggregate(totals);
        tasks.update(&task).await?;
        debug!(task = %task.id, progress = task.progress.value(), "task aggregate updated");

        // Stage 3: the owning project, averaged over all its tasks.
        if let Some(project_id) = task.project_id {
            let mut project = projects
                .find_by_id(&project_id)
                .await?
                .ok_or(PerformanceLogError::ProjectNotFound(project_id))?;
            let task_progress = tasks.list_progress_for_project(&project_id).await?;
            project.reaggregate(&task_progress);
            projects.update(&project).await?;
            debug!(
                project = %project.id,
                percent_complete = project.percent_complete.value(),
                "project aggregate updated"
            );
        }
    }

    // Re-read rather than reuse the in-memory copy; the mirror reflects
    // whatever is persisted once the chain has run.
    let refreshed = activities
        .find_by_id(&activity_id)
        .await?
        .ok_or(PerformanceLogError::ActivityNotFound(activity_id))?;
    Ok(refreshed.progress)
}
