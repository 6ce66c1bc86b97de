//! Multi-step waitlist form controller
//!
//! Holds the current step, every field value, the last validation result
//! and the submission state. All transitions go through the methods here;
//! rendering only reads.

use super::field::FieldSpec;
use super::schema::{find_field, StepSpec, WAITLIST_STEPS};
use super::submission::{SubmissionState, SubmitRejected};
use super::validator::{validate_step, FieldErrors};
use crate::state::WaitlistReceipt;
use crate::submit::{SubmissionError, Submitter, WaitlistPayload};
use std::collections::BTreeMap;

/// State of the waitlist form
#[derive(Debug, Clone)]
pub struct WaitlistForm {
    steps: &'static [StepSpec],
    /// 1-indexed
    current_step: usize,
    values: BTreeMap<String, String>,
    errors: FieldErrors,
    submission: SubmissionState,
    /// Cursor within the current step's fields
    active_field_index: usize,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::with_steps(WAITLIST_STEPS)
    }

    /// Build a form over a custom step list.
    ///
    /// `steps` must not be empty.
    pub fn with_steps(steps: &'static [StepSpec]) -> Self {
        debug_assert!(!steps.is_empty(), "form needs at least one step");
        let values = steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .map(|f| (f.name.to_string(), String::new()))
            .collect();

        Self {
            steps,
            current_step: 1,
            values,
            errors: FieldErrors::new(),
            submission: SubmissionState::default(),
            active_field_index: 0,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == self.total_steps()
    }

    /// Spec for the step currently shown
    pub fn step(&self) -> &'static StepSpec {
        &self.steps[self.current_step - 1]
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Errors from the last validation attempt
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Set a field value. No validation happens here.
    ///
    /// Names that are not part of the form are dropped so they never reach
    /// the payload.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if find_field(self.steps, name).is_none() {
            tracing::warn!("Ignoring value for unknown waitlist field {name:?}");
            return;
        }
        self.values.insert(name.to_string(), value.into());
    }

    /// Validate the current step and move forward if it passes.
    ///
    /// Returns whether the step validated. On the last step a pass clears
    /// errors but the step stays put.
    pub fn go_next(&mut self) -> bool {
        if self.navigation_locked() {
            return false;
        }

        let errors = validate_step(self.step(), &self.values);
        if !errors.is_empty() {
            tracing::debug!(
                step = self.current_step,
                failing = errors.len(),
                "Step validation failed"
            );
            self.focus_first_error(&errors);
            self.errors = errors;
            return false;
        }

        self.errors.clear();
        if self.current_step < self.total_steps() {
            self.current_step += 1;
            self.active_field_index = 0;
        }
        true
    }

    /// Step back, keeping every value. Returns whether the step changed.
    pub fn go_back(&mut self) -> bool {
        if self.navigation_locked() || self.current_step <= 1 {
            return false;
        }
        self.current_step -= 1;
        self.active_field_index = 0;
        self.errors.clear();
        true
    }

    fn navigation_locked(&self) -> bool {
        matches!(
            self.submission,
            SubmissionState::Submitting | SubmissionState::Submitted(_)
        )
    }

    /// Snapshot of all values for the endpoint
    pub fn payload(&self) -> WaitlistPayload {
        WaitlistPayload::new(self.values.clone())
    }

    /// First half of `submit()`: check the state, validate the final step
    /// and move to `Submitting`. The caller must deliver the returned
    /// payload and report back through `complete_submission`.
    pub fn begin_submission(&mut self) -> Result<WaitlistPayload, SubmitRejected> {
        match self.submission {
            SubmissionState::Submitting => return Err(SubmitRejected::AlreadySubmitting),
            SubmissionState::Submitted(_) => return Err(SubmitRejected::AlreadySubmitted),
            SubmissionState::NotSubmitted | SubmissionState::Failed(_) => {}
        }

        if !self.is_final_step() {
            return Err(SubmitRejected::NotOnFinalStep {
                current: self.current_step,
                total: self.total_steps(),
            });
        }

        let errors = validate_step(self.step(), &self.values);
        if !errors.is_empty() {
            let count = errors.len();
            self.focus_first_error(&errors);
            self.errors = errors;
            return Err(SubmitRejected::Invalid(count));
        }

        self.errors.clear();
        self.submission = SubmissionState::Submitting;
        tracing::info!("Waitlist submission started");
        Ok(self.payload())
    }

    /// Second half of `submit()`: record the network outcome
    pub fn complete_submission(&mut self, result: Result<(), SubmissionError>) {
        if !self.submission.is_submitting() {
            tracing::warn!(
                state = self.submission.label(),
                "Ignoring submission result with no request in flight"
            );
            return;
        }

        self.submission = match result {
            Ok(()) => {
                let receipt = WaitlistReceipt::generate();
                tracing::info!(position = receipt.position, "Joined the waitlist");
                SubmissionState::Submitted(receipt)
            }
            Err(err) => {
                tracing::warn!("Waitlist submission failed: {err}");
                SubmissionState::Failed(err)
            }
        };
    }

    /// Validate, send and record the outcome in one go.
    ///
    /// A network failure is not an error here; it leaves the form in
    /// `Failed`, ready for another attempt.
    pub async fn submit(&mut self, submitter: &dyn Submitter) -> Result<(), SubmitRejected> {
        let payload = self.begin_submission()?;
        let result = submitter.submit(&payload).await;
        self.complete_submission(result);
        Ok(())
    }

    // Field cursor, used by the presentation layer

    pub fn active_field_index(&self) -> usize {
        self.active_field_index
    }

    pub fn active_field(&self) -> &'static FieldSpec {
        &self.step().fields[self.active_field_index]
    }

    pub fn next_field(&mut self) {
        let count = self.step().fields.len();
        self.active_field_index = (self.active_field_index + 1) % count;
    }

    pub fn focus_first_field(&mut self) {
        self.active_field_index = 0;
    }

    pub fn focus_last_field(&mut self) {
        self.active_field_index = self.step().fields.len().saturating_sub(1);
    }

    pub fn prev_field(&mut self) {
        let count = self.step().fields.len();
        if self.active_field_index == 0 {
            self.active_field_index = count - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Push a character to the active field
    pub fn push_char(&mut self, c: char) {
        let name = self.active_field().name;
        let mut value = self.value(name).to_string();
        value.push(c);
        self.set_field(name, value);
    }

    /// Remove the last character from the active field
    pub fn pop_char(&mut self) {
        let name = self.active_field().name;
        let mut value = self.value(name).to_string();
        value.pop();
        self.set_field(name, value);
    }

    /// Clear the active field
    pub fn clear_active_field(&mut self) {
        let name = self.active_field().name;
        self.set_field(name, String::new());
    }

    fn focus_first_error(&mut self, errors: &FieldErrors) {
        if let Some(index) = self
            .step()
            .fields
            .iter()
            .position(|f| errors.contains_key(f.name))
        {
            self.active_field_index = index;
        }
    }
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self::new()
    }
}
