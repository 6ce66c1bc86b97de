//! Loading screen rendering with ASCII art logo

use crate::state::SplashState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 6] = [
    r" __  __           _      _  ____  _     _       ",
    r"|  \/  | ___   __| | ___| |/ ___|| |__ (_)_ __  ",
    r"| |\/| |/ _ \ / _` |/ _ \ |\___ \| '_ \| | '_ \ ",
    r"| |  | | (_) | (_| |  __/ | ___) | | | | | |_) |",
    r"|_|  |_|\___/ \__,_|\___|_||____/|_| |_|_| .__/ ",
    r"                                         |_|    ",
];

const LOGO_WIDTH: u16 = 48;
const BAR_WIDTH: usize = 32;

/// Build the full loading screen content: logo, welcome copy, bar, dots
fn build_lines(splash_state: &SplashState) -> Vec<Line<'static>> {
    let logo_style = Style::default().fg(Color::Magenta);
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|l| Line::from(Span::styled(*l, logo_style)))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Welcome to ModelShip",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "Preparing your AI data labeling experience...",
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));

    let filled = (splash_state.progress * BAR_WIDTH as f32).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    lines.push(Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(Color::Magenta)),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(Line::from(""));

    let dots: Vec<Span> = (0..3)
        .map(|i| {
            let color = if i == splash_state.active_dot {
                Color::Magenta
            } else {
                Color::DarkGray
            };
            Span::styled("● ", Style::default().fg(color))
        })
        .collect();
    lines.push(Line::from(dots));

    lines
}

/// Draw the loading screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = build_lines(splash_state);
    let content_height = lines.len() as u16;

    // Center, then slide up by the exit offset (can go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(content_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;

    let lines_off_top = if y_pos < area.y as i32 {
        (area.y as i32 - y_pos) as usize
    } else {
        0
    };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let render_y = y_pos.max(area.y as i32) as u16;
    let width = LOGO_WIDTH.min(area.width);

    let content_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: render_y,
        width,
        height: (visible.len() as u16).min(area.bottom().saturating_sub(render_y)),
    };

    frame.render_widget(
        Paragraph::new(visible).alignment(Alignment::Center),
        content_area,
    );
}
