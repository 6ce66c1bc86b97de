//! Trait abstraction for the submission client to enable mocking in tests

use super::{SubmissionError, WaitlistPayload};
use async_trait::async_trait;

/// Sends a completed waitlist form somewhere
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Perform exactly one delivery attempt. No retries.
    async fn submit(&self, payload: &WaitlistPayload) -> Result<(), SubmissionError>;
}
