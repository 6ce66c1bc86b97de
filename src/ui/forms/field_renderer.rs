//! Field rendering utilities for forms

use crate::state::forms::FieldSpec;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one waitlist field with its value and any validation error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldSpec,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let accent = if error.is_some() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        ))]
    } else if field.is_multiline {
        value.split('\n').map(|l| Line::from(l.to_string())).collect()
    } else {
        vec![Line::from(value.to_string())]
    };

    // Cursor goes before the placeholder, after real text
    if value.is_empty() {
        if let Some(first) = lines.first_mut() {
            first.spans.insert(0, cursor);
        }
    } else if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Height a field needs in the form layout
pub fn field_height(field: &FieldSpec) -> u16 {
    if field.is_multiline {
        5
    } else {
        3
    }
}
