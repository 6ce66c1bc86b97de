//! Submission failures

use thiserror::Error;

/// Why a submission did not reach the waitlist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The request never got a response (DNS, connect, TLS, timeout)
    #[error("could not reach the waitlist endpoint: {0}")]
    Transport(String),
    /// The endpoint answered with a non-2xx status
    #[error("waitlist endpoint responded with HTTP {0}")]
    Status(u16),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}
