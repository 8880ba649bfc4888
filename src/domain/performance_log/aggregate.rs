//! PerformanceLog aggregate entity.
//!
//! A daily performance log records a quantity completed against one project
//! activity. Submission triggers forward propagation up the hierarchy;
//! cancellation triggers the mirror update. A cancelled log is kept as a
//! record, never deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ActivityId, PerformanceLogId, Progress, StateMachine, Timestamp,
};

use super::{PerformanceLogError, PerformanceLogStatus};

/// PerformanceLog aggregate - one operator-submitted quantity entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceLog {
    /// Unique identifier for this log.
    pub id: PerformanceLogId,

    /// Activity the quantity was performed against. Required for submission
    /// and cancellation; a log without it cannot be processed.
    pub activity_id: Option<ActivityId>,

    /// Calendar day the work was performed.
    pub log_date: NaiveDate,

    /// Quantity contributed by this log. Signed: a correcting entry may be
    /// negative for additive measurement types.
    pub qty_completed: f64,

    /// Mirror of the linked activity's progress at the time this log was
    /// last processed. May lag behind later edits to the activity.
    pub performance_to_date: Option<Progress>,

    /// Lifecycle status.
    pub status: PerformanceLogStatus,

    /// When the log was created.
    pub created_at: Timestamp,

    /// When the log was last updated.
    pub updated_at: Timestamp,
}

impl PerformanceLog {
    /// Creates a new draft log.
    pub fn new(
        id: PerformanceLogId,
        activity_id: Option<ActivityId>,
        log_date: NaiveDate,
        qty_completed: f64,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            activity_id,
            log_date,
            qty_completed,
            performance_to_date: None,
            status: PerformanceLogStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the linked activity, or the precondition failure if unset.
    pub fn linked_activity(&self) -> Result<ActivityId, PerformanceLogError> {
        self.activity_id
            .ok_or(PerformanceLogError::MissingActivityLink(self.id))
    }

    /// Moves the log to Submitted.
    pub fn submit(&mut self) -> Result<(), PerformanceLogError> {
        self.transition(PerformanceLogStatus::Submitted, "submit")
    }

    /// Moves the log to Cancelled.
    pub fn cancel(&mut self) -> Result<(), PerformanceLogError> {
        self.transition(PerformanceLogStatus::Cancelled, "cancel")
    }

    /// Records the activity progress mirrored onto this log.
    pub fn record_performance_to_date(&mut self, progress: Progress) {
        self.performance_to_date = Some(progress);
        self.updated_at = Timestamp::now();
    }

    fn transition(
        &mut self,
        target: PerformanceLogStatus,
        attempted: &str,
    ) -> Result<(), PerformanceLogError> {
        self.status = self.status.transition_to(target).map_err(|_| {
            PerformanceLogError::invalid_state(format!("{:?}", self.status), attempted)
        })?;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_log(activity_id: Option<ActivityId>) -> PerformanceLog {
        PerformanceLog::new(
            PerformanceLogId::new(),
            activity_id,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            12.5,
        )
    }

    #[test]
    fn new_log_is_draft_with_no_mirror() {
        let log = draft_log(Some(ActivityId::new()));
        assert_eq!(log.status, PerformanceLogStatus::Draft);
        assert!(log.performance_to_date.is_none());
    }

    #[test]
    fn submit_moves_draft_to_submitted() {
        let mut log = draft_log(Some(ActivityId::new()));
        log.submit().unwrap();
        assert_eq!(log.status, PerformanceLogStatus::Submitted);
    }

    #[test]
    fn cancel_moves_submitted_to_cancelled() {
        let mut log = draft_log(Some(ActivityId::new()));
        log.submit().unwrap();
        log.cancel().unwrap();
        assert_eq!(log.status, PerformanceLogStatus::Cancelled);
    }

    #[test]
    fn cancel_fails_on_draft() {
        let mut log = draft_log(Some(ActivityId::new()));
        let result = log.cancel();
        assert!(matches!(
            result,
            Err(PerformanceLogError::InvalidState { .. })
        ));
        assert_eq!(log.status, PerformanceLogStatus::Draft);
    }

    #[test]
    fn submit_fails_on_cancelled() {
        let mut log = draft_log(Some(ActivityId::new()));
        log.submit().unwrap();
        log.cancel().unwrap();
        assert!(log.submit().is_err());
    }

    #[test]
    fn linked_activity_returns_id_when_set() {
        let activity_id = ActivityId::new();
        let log = draft_log(Some(activity_id));
        assert_eq!(log.linked_activity().unwrap(), activity_id);
    }

    #[test]
    fn linked_activity_fails_when_unset() {
        let log = draft_log(None);
        assert!(matches!(
            log.linked_activity(),
            Err(PerformanceLogError::MissingActivityLink(_))
        ));
    }

    #[test]
    fn record_performance_to_date_sets_mirror() {
        let mut log = draft_log(Some(ActivityId::new()));
        log.record_performance_to_date(Progress::new(62.5));
        assert_eq!(log.performance_to_date, Some(Progress::new(62.5)));
    }
}
