//! Form domain layer
//!
//! Type-safe handling of the multi-step waitlist form, independent of
//! any rendering.

mod field;
mod form_state;
mod schema;
mod submission;
mod validator;

pub use field::FieldSpec;
pub use form_state::WaitlistForm;
pub use submission::{SubmissionState, SubmitRejected};
