//! Submission status state machine.

use serde::{Deserialize, Serialize};

use crate::CommerceError;

/// Where a form is in its submit cycle.
///
/// `Idle -> Submitting -> Submitted -> Idle`, or
/// `Submitting -> Failed -> Idle` when the send fails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Confirmation is showing.
    Submitted,
    Failed(String),
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Failed(_) => "failed",
        }
    }

    /// The submit button is disabled while this is true.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionStatus::Submitted)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start sending. Allowed from `Idle` and, as a retry, from `Failed`.
    pub fn begin(&mut self) -> Result<(), CommerceError> {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {
                *self = SubmissionStatus::Submitting;
                Ok(())
            }
            _ => Err(self.invalid("submitting")),
        }
    }

    pub fn succeed(&mut self) -> Result<(), CommerceError> {
        self.finish(SubmissionStatus::Submitted)
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), CommerceError> {
        self.finish(SubmissionStatus::Failed(message.into()))
    }

    /// Dismiss the confirmation or the failure and go back to `Idle`.
    pub fn acknowledge(&mut self) -> Result<(), CommerceError> {
        match self {
            SubmissionStatus::Submitted | SubmissionStatus::Failed(_) => {
                *self = SubmissionStatus::Idle;
                Ok(())
            }
            _ => Err(self.invalid("idle")),
        }
    }

    fn finish(&mut self, next: SubmissionStatus) -> Result<(), CommerceError> {
        if !self.is_busy() {
            return Err(self.invalid(next.as_str()));
        }
        *self = next;
        Ok(())
    }

    fn invalid(&self, to: &str) -> CommerceError {
        CommerceError::InvalidSubmissionTransition {
            from: self.as_str().to_string(),
            to: to.to_string(),
        }
    }
}
