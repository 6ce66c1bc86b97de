//! Application state definitions

use super::forms::WaitlistForm;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Loading screen with logo animation
    Splash,
    /// Hero copy and feature list
    #[default]
    Landing,
    /// Multi-step waitlist form
    Form,
    /// "You're on the list!" with the referral receipt
    Success,
}

/// Which control has focus on the form view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Fields,
    Buttons,
}

/// A product feature shown on the landing view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Upload datasets",
        description: "Easily upload CSV and JSON files to start your labeling process.",
    },
    Feature {
        title: "AI-powered auto-labeling",
        description: "Leverage GPT-3.5 turbo to automatically label your data with high accuracy.",
    },
    Feature {
        title: "Human-in-the-loop review",
        description: "Intuitive interface for reviewing and editing AI-generated labels.",
    },
    Feature {
        title: "Instant dataset export",
        description: "Export your labeled data in CSV or JSON format with a single click.",
    },
    Feature {
        title: "Private & secure by design",
        description: "Your data never leaves your control, with enterprise-grade security.",
    },
];

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: WaitlistForm,
    pub form_focus: FormFocus,
    /// 0 = Back, 1 = Next / Join Waitlist
    pub selected_button: usize,
    /// Highlighted feature card on the landing view
    pub selected_feature: usize,
    /// Errors waiting to be shown in a modal dialog
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn next_feature(&mut self) {
        self.selected_feature = (self.selected_feature + 1) % FEATURES.len();
    }

    pub fn prev_feature(&mut self) {
        if self.selected_feature == 0 {
            self.selected_feature = FEATURES.len() - 1;
        } else {
            self.selected_feature -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_landing() {
        assert_eq!(View::default(), View::Landing);
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());

        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));

        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));

        state.dismiss_error();
        assert!(!state.has_errors());
        state.dismiss_error(); // Should not panic
    }

    #[test]
    fn test_feature_selection_wraps() {
        let mut state = AppState::default();
        state.prev_feature();
        assert_eq!(state.selected_feature, FEATURES.len() - 1);
        state.next_feature();
        assert_eq!(state.selected_feature, 0);
    }

    #[test]
    fn test_five_features() {
        assert_eq!(FEATURES.len(), 5);
    }
}
