//! Submission lifecycle of the waitlist form

use crate::state::WaitlistReceipt;
use crate::submit::SubmissionError;
use thiserror::Error;

/// Where the form is in its single-shot submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    NotSubmitted,
    /// Request in flight; another submit is refused
    Submitting,
    /// Terminal
    Submitted(WaitlistReceipt),
    /// Values are kept so the user can retry
    Failed(SubmissionError),
}

impl SubmissionState {
    /// Whether `submit()` may start a new request from this state
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::NotSubmitted | Self::Failed(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn receipt(&self) -> Option<&WaitlistReceipt> {
        match self {
            Self::Submitted(receipt) => Some(receipt),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotSubmitted => "Not submitted",
            Self::Submitting => "Submitting...",
            Self::Submitted(_) => "Submitted",
            Self::Failed(_) => "Failed",
        }
    }
}

/// Why `submit()` refused to start a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("submit is only available on the last step (on step {current} of {total})")]
    NotOnFinalStep { current: usize, total: usize },
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("you are already on the waitlist")]
    AlreadySubmitted,
    #[error("{0} field(s) need attention before submitting")]
    Invalid(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_submitted() {
        assert_eq!(SubmissionState::default(), SubmissionState::NotSubmitted);
    }

    #[test]
    fn test_can_submit() {
        assert!(SubmissionState::NotSubmitted.can_submit());
        assert!(SubmissionState::Failed(SubmissionError::Status(500)).can_submit());
        assert!(!SubmissionState::Submitting.can_submit());
        assert!(!SubmissionState::Submitted(WaitlistReceipt::generate()).can_submit());
    }

    #[test]
    fn test_receipt_only_when_submitted() {
        assert!(SubmissionState::NotSubmitted.receipt().is_none());
        assert!(SubmissionState::Submitted(WaitlistReceipt::generate())
            .receipt()
            .is_some());
    }

    #[test]
    fn test_rejection_messages() {
        let err = SubmitRejected::NotOnFinalStep {
            current: 2,
            total: 4,
        };
        assert_eq!(
            err.to_string(),
            "submit is only available on the last step (on step 2 of 4)"
        );
        assert_eq!(
            SubmitRejected::Invalid(3).to_string(),
            "3 field(s) need attention before submitting"
        );
    }
}
