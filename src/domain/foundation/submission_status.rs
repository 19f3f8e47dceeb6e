//! SubmissionStatus enum for tracking the lifecycle of a batch submission.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of the batch upload coordinator.
///
/// `Pending` is the only state that cannot be entered again directly; a
/// second submission attempted while pending is the busy condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    /// Returns true while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    /// Returns true once a submission has settled either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded | SubmissionStatus::Failed)
    }
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, target),
            (Idle, Pending)
                | (Pending, Succeeded)
                | (Pending, Failed)
                | (Succeeded, Pending)
                | (Failed, Pending)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionStatus::*;
        match self {
            Idle | Succeeded | Failed => vec![Pending],
            Pending => vec![Succeeded, Failed],
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubmissionStatus::Idle => "Idle",
            SubmissionStatus::Pending => "Pending",
            SubmissionStatus::Succeeded => "Succeeded",
            SubmissionStatus::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}
