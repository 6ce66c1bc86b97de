//! UI module for rendering the TUI

mod components;
mod forms;
mod landing;
mod layout;
mod splash;
mod success;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // The loading screen owns the whole terminal
    if let View::Splash = app.state.current_view {
        if let Some(splash_state) = &app.splash_state {
            splash::draw(frame, area, splash_state);
        }
        return;
    }

    let main_area = layout::content_area(area);
    match app.state.current_view {
        View::Splash => {}
        View::Landing => landing::draw(frame, main_area, app),
        View::Form => forms::draw_waitlist_form(frame, main_area, app),
        View::Success => success::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Modal errors go on top of everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
