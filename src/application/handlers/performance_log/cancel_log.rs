//! CancelPerformanceLogHandler - reverse propagation on cancellation.

use std::sync::Arc;

use tracing::info;

use crate::domain::activity::Direction;
use crate::domain::foundation::{PerformanceLogId, Progress};
use crate::domain::performance_log::{PerformanceLog, PerformanceLogError};
use crate::ports::{
    ActivityRepository, PerformanceLogRepository, ProjectRepository, TaskRepository,
};

use super::propagation::propagate_quantity;

/// Command to cancel a submitted performance log.
#[derive(Debug, Clone)]
pub struct CancelPerformanceLogCommand {
    pub log_id: PerformanceLogId,
}

/// Result of successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelPerformanceLogResult {
    pub log: PerformanceLog,
    /// Activity progress after the reversal, mirrored onto the log.
    pub performance_to_date: Progress,
}

/// Handler for cancelling performance logs.
///
/// Runs the same propagation chain as submission with the direction
/// reversed, so a submit followed by a cancel restores every aggregate to
/// its prior state for additive measurement types. The cancelled log is
/// retained, never deleted.
pub struct CancelPerformanceLogHandler {
    logs: Arc<dyn PerformanceLogRepository>,
    activities: Arc<dyn ActivityRepository>,
    tasks: Arc<dyn TaskRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl CancelPerformanceLogHandler {
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
        cmd: CancelPerformanceLogCommand,
    ) -> Result<CancelPerformanceLogResult, PerformanceLogError> {
        let mut log = self
            .logs
            .find_by_id(&cmd.log_id)
            .await?
            .ok_or_else(|| PerformanceLogError::not_found(cmd.log_id))?;
        let activity_id = log.linked_activity()?;
        log.cancel()?;

        let progress = propagate_quantity(
            &self.activities,
            &self.tasks,
            &self.projects,
            activity_id,
            log.qty_completed,
            Direction::Reverse,
        )
        .await?;

        self.logs.update(&log).await?;
        self.logs.set_performance_to_date(&log.id, progress).await?;
        log.record_performance_to_date(progress);

        info!(
            log = %log.id,
            activity = %activity_id,
            qty = log.qty_completed,
            performance_to_date = progress.value(),
            "performance log cancelled"
        );

        Ok(CancelPerformanceLogResult {
            log,
            performance_to_date: progress,
        })
    }
}
