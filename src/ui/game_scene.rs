//! UI rendering for the flight scene: play area, HUD, status bar, and the
//! game-over overlay.

use crate::constants::MAX_LIVES;
use crate::game::{FlightGame, Phase};
use crate::ui::game_common::{render_overlay, render_status_bar};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// Cells consumed by chrome around the play area: border, HUD line, status bar
const CHROME_COLS: u16 = 2;
const CHROME_ROWS: u16 = 5;

/// Spin animation frames for the star, indexed from its rotation angle.
const STAR_FRAMES: [&str; 4] = ["✶", "✸", "✹", "✷"];

/// Terminal cells available to the play area for a given terminal size.
/// The main loop uses this to size the simulation viewport.
pub fn play_area_cells(cols: u16, rows: u16) -> (u16, u16) {
    (
        cols.saturating_sub(CHROME_COLS),
        rows.saturating_sub(CHROME_ROWS),
    )
}

/// Render the flight scene.
pub fn render_game(frame: &mut Frame, area: Rect, game: &FlightGame) {
    let block = Block::default()
        .title(" Sky Chase ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // HUD line on top, play area in the middle, status bar at the bottom
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(inner);

    render_hud(frame, v_chunks[0], game);
    render_play_area(frame, v_chunks[1], game);
    render_status_bar_content(frame, v_chunks[2], game);

    if game.phase == Phase::GameOver {
        render_game_over(frame, area, game);
    }
}

/// Score on the left, heart lives on the right.
fn render_hud(frame: &mut Frame, area: Rect, game: &FlightGame) {
    let score = Paragraph::new(format!(" STARS: {}", game.score)).style(
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(score, area);

    let lives = game.lives_remaining() as usize;
    let hearts = format!(
        "{}{} ",
        "♥".repeat(lives),
        "♡".repeat(MAX_LIVES as usize - lives)
    );
    let hearts = Paragraph::new(Line::from(Span::styled(
        hearts,
        Style::default().fg(Color::Red),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(hearts, area);
}

/// Render the play area, scaling simulation pixels onto terminal cells.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlightGame) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 || game.width <= 0.0 || game.height <= 0.0 {
        return;
    }

    let to_cell = |x: f64, y: f64| -> (i64, i64) {
        let col = (x / game.width * (width as f64 - 1.0)).round() as i64;
        let row = (y / game.height * (height as f64 - 1.0)).round() as i64;
        (col, row)
    };

    let player_cell = to_cell(game.player.x, game.player.y);
    let star_cell = game.star.as_ref().map(|s| to_cell(s.x, s.y));
    let alien_cell = game.alien.as_ref().map(|a| to_cell(a.x, a.y));

    let player_glyph = if game.player.vy < -50.0 {
        "▲" // Climbing
    } else if game.player.vy > 150.0 {
        "▼" // Falling fast
    } else {
        "►" // Gliding
    };
    let star_glyph = game
        .star
        .as_ref()
        .map(|s| STAR_FRAMES[((s.rotation / 0.4) as usize) % STAR_FRAMES.len()])
        .unwrap_or("✶");

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let here = (col as i64, row as i64);

            if here == player_cell {
                spans.push(Span::styled(
                    player_glyph,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
            } else if star_cell == Some(here) {
                spans.push(Span::styled(
                    star_glyph,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            } else if alien_cell == Some(here) {
                spans.push(Span::styled(
                    "Ж",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlightGame) {
    render_status_bar(
        frame,
        area,
        &format!("Star speed: {:.0} px/s", game.star_speed),
        Color::Green,
        &[("[Space/Up/Enter]", "Fly"), ("[Q]", "Quit")],
    );
}

/// Render the game-over overlay on top of the frozen play area.
fn render_game_over(frame: &mut Frame, area: Rect, game: &FlightGame) {
    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("YOU MISSED {} STARS!", MAX_LIVES),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Final score: {}", game.score),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Press Space to restart]",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_overlay(frame, area, Color::Red, lines);
}
