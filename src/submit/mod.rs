//! Waitlist submission over HTTP

mod client;
mod error;
mod payload;
mod traits;

pub use client::HttpSubmitter;
pub use error::SubmissionError;
pub use payload::WaitlistPayload;
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;
