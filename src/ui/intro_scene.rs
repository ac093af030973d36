//! The intro overlay shown before the first flight.

use crate::build_info;
use crate::constants::MAX_LIVES;
use crate::ui::game_common::render_overlay;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn render_intro(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "S K Y   C H A S E",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Catch the drifting stars. Dodge the alien.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Space, Up, Enter, or a click keeps you airborne.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("Lose {} stars and the flight is over.", MAX_LIVES),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Press Space to start]",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} ({})", build_info::BUILD_DATE, build_info::BUILD_COMMIT),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_overlay(frame, area, Color::Cyan, lines);
}
