//! Application state and core logic

use crate::platform::COPY_MODIFIER;
use crate::state::forms::SubmitRejected;
use crate::state::{AppState, FormFocus, SplashState, View};
use crate::submit::{SubmissionError, Submitter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Shown when the endpoint rejects or cannot be reached
const SUBMISSION_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

type SubmissionResult = Result<(), SubmissionError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Delivers the finished form
    submitter: Arc<dyn Submitter>,
    /// Results of background submissions
    submission_tx: mpsc::UnboundedSender<SubmissionResult>,
    submission_rx: mpsc::UnboundedReceiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Status line message
    pub status_message: Option<String>,
    /// Loading screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App instance, starting on the loading screen
    #[allow(clippy::field_reassign_with_default)]
    pub fn new(submitter: Arc<dyn Submitter>) -> Self {
        let (submission_tx, submission_rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();

        // Start with splash screen
        state.current_view = View::Splash;

        Self {
            state,
            submitter,
            submission_tx,
            submission_rx,
            quit: false,
            copy_message: None,
            status_message: None,
            splash_state: Some(SplashState::new()),
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.finish_splash();
                return true;
            }
        }
        false
    }

    fn finish_splash(&mut self) {
        self.splash_state = None;
        self.state.current_view = View::Landing;
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if a submission is waiting on the network
    pub fn is_submitting(&self) -> bool {
        self.state.form.submission().is_submitting()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Apply any submission results that arrived since the last frame
    pub fn poll_submission(&mut self) {
        while let Ok(result) = self.submission_rx.try_recv() {
            self.apply_submission_result(result);
        }
    }

    fn apply_submission_result(&mut self, result: SubmissionResult) {
        let failed = result.is_err();
        self.state.form.complete_submission(result);

        if failed {
            self.status_message = None;
            self.push_error(SUBMISSION_FAILED_MESSAGE);
        } else if self.state.form.submission().receipt().is_some() {
            self.status_message = Some("You've been added to our waitlist!".to_string());
            self.state.current_view = View::Success;
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        match self.state.current_view {
            View::Splash => self.handle_splash_key(),
            View::Landing => self.handle_landing_key(key),
            View::Form => self.handle_form_key(key),
            View::Success => self.handle_success_key(key),
        }
    }

    /// Any key ends the loading screen on the next frame
    fn handle_splash_key(&mut self) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('w') => self.open_form(),
            KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l') => {
                self.state.next_feature()
            }
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('h') => {
                self.state.prev_feature()
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn open_form(&mut self) {
        self.state.current_view = View::Form;
        self.state.form_focus = FormFocus::Fields;
        self.state.selected_button = 1;
        self.status_message = None;
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('s') if ctrl => self.advance(),
            KeyCode::Char('u') if ctrl => {
                if self.state.form_focus == FormFocus::Fields {
                    self.state.form.clear_active_field();
                }
            }
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            _ => match self.state.form_focus {
                FormFocus::Fields => self.handle_field_input(key),
                FormFocus::Buttons => self.handle_button_input(key),
            },
        }
    }

    fn handle_field_input(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Enter => {
                if form.active_field().is_multiline {
                    form.push_char('\n');
                } else {
                    self.focus_next();
                }
            }
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                form.push_char(c)
            }
            _ => {}
        }
    }

    fn handle_button_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.selected_button = 0,
            KeyCode::Right | KeyCode::Char('l') => self.state.selected_button = 1,
            KeyCode::Enter => {
                if self.state.selected_button == 0 {
                    self.go_back();
                } else {
                    self.advance();
                }
            }
            _ => {}
        }
    }

    fn focus_next(&mut self) {
        let form = &mut self.state.form;
        match self.state.form_focus {
            FormFocus::Fields => {
                if form.active_field_index() + 1 >= form.step().fields.len() {
                    self.state.form_focus = FormFocus::Buttons;
                    self.state.selected_button = 1;
                } else {
                    form.next_field();
                }
            }
            FormFocus::Buttons => {
                self.state.form_focus = FormFocus::Fields;
                form.focus_first_field();
            }
        }
    }

    fn focus_prev(&mut self) {
        let form = &mut self.state.form;
        match self.state.form_focus {
            FormFocus::Fields => {
                if form.active_field_index() == 0 {
                    self.state.form_focus = FormFocus::Buttons;
                } else {
                    form.prev_field();
                }
            }
            FormFocus::Buttons => {
                self.state.form_focus = FormFocus::Fields;
                form.focus_last_field();
            }
        }
    }

    /// Back button / Esc: previous step, or the landing view from step 1
    fn go_back(&mut self) {
        if self.is_submitting() {
            return;
        }
        if !self.state.form.go_back() && self.state.form.current_step() == 1 {
            self.state.current_view = View::Landing;
        }
        self.state.form_focus = FormFocus::Fields;
    }

    /// Next button: validate and move on, or submit from the last step
    fn advance(&mut self) {
        if self.state.form.is_final_step() {
            self.start_submission();
            return;
        }

        if !self.state.form.go_next() {
            self.report_invalid_fields();
        } else {
            self.status_message = None;
        }
        self.state.form_focus = FormFocus::Fields;
    }

    fn report_invalid_fields(&mut self) {
        let count = self.state.form.errors().len();
        let noun = if count == 1 { "field" } else { "fields" };
        self.status_message = Some(format!("Please fix {count} highlighted {noun}."));
    }

    /// Kick off the HTTP request on a background task
    fn start_submission(&mut self) {
        match self.state.form.begin_submission() {
            Ok(payload) => {
                self.status_message = Some("Submitting...".to_string());
                let submitter = Arc::clone(&self.submitter);
                let tx = self.submission_tx.clone();
                tokio::spawn(async move {
                    let result = submitter.submit(&payload).await;
                    // Receiver only goes away on shutdown
                    let _ = tx.send(result);
                });
            }
            Err(SubmitRejected::Invalid(_)) => {
                self.report_invalid_fields();
                self.state.form_focus = FormFocus::Fields;
            }
            Err(err) => {
                tracing::debug!("Submit ignored: {err}");
                self.status_message = Some(err.to_string());
            }
        }
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.is_empty() || key.modifiers == COPY_MODIFIER => {
                self.copy_referral_code()
            }
            KeyCode::Char('s') => self.copy_share_link(),
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => self.quit = true,
            _ => {}
        }
    }

    fn copy_referral_code(&mut self) {
        let Some(code) = self
            .state
            .form
            .submission()
            .receipt()
            .map(|r| r.referral_code.clone())
        else {
            return;
        };
        self.copy_message = Some(match copy_to_clipboard(&code) {
            Ok(()) => "Referral code copied to clipboard".to_string(),
            Err(e) => format!("Copy failed: {e}"),
        });
    }

    fn copy_share_link(&mut self) {
        let Some(url) = self
            .state
            .form
            .submission()
            .receipt()
            .and_then(|r| r.share_url())
        else {
            return;
        };
        self.copy_message = Some(match copy_to_clipboard(url.as_str()) {
            Ok(()) => "Share link copied to clipboard".to_string(),
            Err(e) => format!("Copy failed: {e}"),
        });
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
