//! SubmitPerformanceLogHandler - forward propagation on submission.

use std::sync::Arc;

use tracing::info;

use crate::domain::activity::Direction;
use crate::domain::foundation::{PerformanceLogId, Progress};
use crate::domain::performance_log::{PerformanceLog, PerformanceLogError};
use crate::ports::{
    ActivityRepository, PerformanceLogRepository, ProjectRepository, TaskRepository,
};

use super::propagation::propagate_quantity;

/// Command to submit a draft performance log.
#[derive(Debug, Clone)]
pub struct SubmitPerformanceLogCommand {
    pub log_id: PerformanceLogId,
}

/// Result of successful submission.
#[derive(Debug, Clone)]
pub struct SubmitPerformanceLogResult {
    pub log: PerformanceLog,
    /// Activity progress mirrored onto the log.
    pub performance_to_date: Progress,
}

/// Handler for submitting performance logs.
///
/// Applies the logged quantity to the linked activity, re-aggregates the
/// owning task and project, then mirrors the activity's progress back onto
/// the log. Preconditions (log exists, activity linked, status transition
/// valid) are checked before any aggregate is written.
pub struct SubmitPerformanceLogHandler {
    logs: Arc<dyn PerformanceLogRepository>,
    activities: Arc<dyn ActivityRepository>,
    tasks: Arc<dyn TaskRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl SubmitPerformanceLogHandler {
    pub fn new(
        logs: Arc<dyn PerformanceLogRepository>,
        activities: Arc<dyn ActivityRepository>,
        tasks: Arc<dyn TaskRepository>,
        projects: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            logs,
            activities,
            tasks,
            projects,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitPerformanceLogCommand,
    ) -> Result<SubmitPerformanceLogResult, PerformanceLogError> {
        // 1. Load the log and check every precondition before touching any
        //    aggregate.
        let mut log = self
            .logs
            .find_by_id(&cmd.log_id)
            .await?
            .ok_or_else(|| PerformanceLogError::not_found(cmd.log_id))?;
        let activity_id = log.linked_activity()?;
        log.submit()?;

        // 2. Forward propagation up the hierarchy.
        let progress = propagate_quantity(
            &self.activities,
            &self.tasks,
            &self.projects,
            activity_id,
            log.qty_completed,
            Direction::Forward,
        )
        .await?;

        // 3. Persist the new status, then mirror the activity progress onto
        //    the log via the single-field write.
        self.logs.update(&log).await?;
        self.logs.set_performance_to_date(&log.id, progress).await?;
        log.record_performance_to_date(progress);

        info!(
            log = %log.id,
            activity = %activity_id,
            qty = log.qty_completed,
            performance_to_date = progress.value(),
            "performance log submitted"
        );

        Ok(SubmitPerformanceLogResult {
            log,
            performance_to_date: progress,
        })
    }
}
