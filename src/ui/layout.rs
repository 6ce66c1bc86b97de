//! Layout helpers and the status bar

use crate::app::App;
use crate::platform::{CONTINUE_SHORTCUT, COPY_SHORTCUT};
use crate::state::forms::SubmissionState;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar, returning the content area
pub fn content_area(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// A rect of at most `width` x `height`, centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission indicator
    let indicator = match app.state.form.submission() {
        SubmissionState::NotSubmitted => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
        SubmissionState::Submitting => Span::styled(" ◐ ", Style::default().fg(Color::Yellow)),
        SubmissionState::Submitted(_) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmissionState::Failed(_) => Span::styled(" ○ ", Style::default().fg(Color::Red)),
    };
    spans.push(indicator);

    // View-specific hints
    let hints = get_view_hints(app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Splash => "Press any key to skip".to_string(),
        View::Landing => "Enter:join waitlist  ←/→:features  q:quit".to_string(),
        View::Form => format!("Tab:next field  {CONTINUE_SHORTCUT}:continue  ^U:clear  Esc:back"),
        View::Success => format!("{COPY_SHORTCUT}:copy code  s:copy share link  q:quit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered(area, 40, 10);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(5, 5, 20, 10);
        let rect = centered(area, 100, 100);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_content_area_reserves_status_line() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(content_area(area).height, 23);
    }

    #[test]
    fn test_every_view_has_hints() {
        for view in [View::Splash, View::Landing, View::Form, View::Success] {
            assert!(!get_view_hints(view).is_empty());
        }
    }
}
