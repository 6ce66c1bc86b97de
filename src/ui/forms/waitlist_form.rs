//! Multi-step waitlist form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::FormFocus;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widest the form grows on large terminals
const MAX_FORM_WIDTH: u16 = 80;

/// Draw the current step of the waitlist form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let step = form.step();

    let width = MAX_FORM_WIDTH.min(area.width);
    let area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let block = Block::default()
        .title(format!(
            " {} - Step {} of {} ",
            step.title,
            form.current_step(),
            form.total_steps()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)]; // Subtitle + progress
    constraints.extend(
        step.fields
            .iter()
            .map(|f| Constraint::Length(field_height(f))),
    );
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    draw_header(frame, chunks[0], app);

    let fields_focused = app.state.form_focus == FormFocus::Fields;
    for (idx, field) in step.fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx + 1],
            field,
            form.value(field.name),
            form.error(field.name),
            fields_focused && idx == form.active_field_index(),
        );
    }

    draw_buttons(frame, chunks[chunks.len() - 1], app);
}

/// Subtitle and a step progress strip
fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let progress: Vec<Span> = (1..=form.total_steps())
        .map(|n| {
            let style = if n <= form.current_step() {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled("━━━━ ", style)
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            form.step().subtitle,
            Style::default().fg(Color::Gray),
        )),
        Line::from(progress),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let buttons_focused = app.state.form_focus == FormFocus::Buttons;
    let submitting = form.submission().is_submitting();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let back_label = if form.current_step() == 1 { "Home" } else { "Back" };
    render_action_button(
        frame,
        chunks[0],
        back_label,
        buttons_focused && app.state.selected_button == 0,
        !submitting,
        Color::Gray,
    );

    let next_label = if submitting {
        "Submitting..."
    } else if form.is_final_step() {
        "Join Waitlist"
    } else {
        "Next Step"
    };
    render_action_button(
        frame,
        chunks[1],
        next_label,
        buttons_focused && app.state.selected_button == 1,
        form.submission().can_submit(),
        Color::Magenta,
    );
}
