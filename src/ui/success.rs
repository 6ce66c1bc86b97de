//! "You're on the list!" view

use super::layout::centered;
use crate::app::App;
use crate::platform::COPY_SHORTCUT;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the success view with the waitlist receipt
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(receipt) = app.state.form.submission().receipt() else {
        return;
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("✔", Style::default().fg(Color::Green))),
        Line::from(""),
        Line::from(Span::styled(
            "You're on the list!",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Your position: #{}", receipt.position),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("Joined {}", receipt.joined_at.format("%Y-%m-%d %H:%M UTC")),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Your referral code: ", Style::default().fg(Color::Gray)),
            Span::styled(
                receipt.referral_code.as_str(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(COPY_SHORTCUT, key_style),
            Span::raw(" copy code   "),
            Span::styled("s", key_style),
            Span::raw(" copy share link   "),
            Span::styled("q", key_style),
            Span::raw(" quit"),
        ]),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );

    frame.render_widget(card, centered(area, 60, 13));
}
