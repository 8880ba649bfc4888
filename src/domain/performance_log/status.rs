//! Performance log status state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a daily performance log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLogStatus {
    /// Recorded but not yet counted toward any aggregate.
    Draft,

    /// Submitted; its quantity is reflected in the activity, task, and
    /// project aggregates.
    Submitted,

    /// Cancelled; its quantity has been backed out again. The log itself is
    /// kept, not deleted.
    Cancelled,
}

impl StateMachine for PerformanceLogStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PerformanceLogStatus::*;
        matches!((self, target), (Draft, Submitted) | (Submitted, Cancelled))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PerformanceLogStatus::*;
        match self {
            Draft => vec![Submitted],
            Submitted => vec![Cancelled],
            Cancelled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_can_transition_to_submitted() {
        let status = PerformanceLogStatus::Draft;
        assert_eq!(
            status.transition_to(PerformanceLogStatus::Submitted),
            Ok(PerformanceLogStatus::Submitted)
        );
    }

    #[test]
    fn submitted_can_transition_to_cancelled() {
        let status = PerformanceLogStatus::Submitted;
        assert_eq!(
            status.transition_to(PerformanceLogStatus::Cancelled),
            Ok(PerformanceLogStatus::Cancelled)
        );
    }

    #[test]
    fn draft_cannot_transition_to_cancelled() {
        let status = PerformanceLogStatus::Draft;
        assert!(status
            .transition_to(PerformanceLogStatus::Cancelled)
            .is_err());
    }

    #[test]
    fn cancelled_is_terminal() {
        assert!(PerformanceLogStatus::Cancelled.is_terminal());
    }

    #[test]
    fn submitted_cannot_return_to_draft() {
        let status = PerformanceLogStatus::Submitted;
        assert!(!status.can_transition_to(&PerformanceLogStatus::Draft));
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PerformanceLogStatus::Submitted).unwrap(),
            "\"submitted\""
        );
    }
}
