//! Landing view: hero copy and feature cards

use super::components::{render_action_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::FEATURES;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const HEADLINE: &str = "Ship Better Models with AI Data Labeling.";
const TAGLINE: &str = "ModelShip helps AI teams label data faster with AI-powered auto-labeling, \
    easy review flows, and instant export - finally making data prep less painful.";

/// Draw the landing view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),             // Hero
            Constraint::Length(BUTTON_HEIGHT), // Call to action
            Constraint::Min(0),                // Features
        ])
        .margin(1)
        .split(area);

    draw_hero(frame, chunks[0]);

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(24),
            Constraint::Min(0),
        ])
        .split(chunks[1])[1];
    render_action_button(
        frame,
        button_area,
        "Join The Waitlist →",
        true,
        true,
        Color::Magenta,
    );

    draw_features(frame, chunks[2], app.state.selected_feature);
}

fn draw_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            HEADLINE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
    ];

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}

fn draw_features(frame: &mut Frame, area: Rect, selected: usize) {
    let block = Block::default()
        .title(" Features ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(FEATURES.iter().map(|_| Constraint::Length(2)))
        .split(inner);

    for (idx, (feature, row)) in FEATURES.iter().zip(rows.iter()).enumerate() {
        let is_selected = idx == selected;
        let marker = if is_selected { "▶ " } else { "  " };
        let title_style = if is_selected {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(marker, title_style),
                Span::styled(feature.title, title_style),
            ]),
            Line::from(Span::styled(
                format!("  {}", feature.description),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), *row);
    }
}
