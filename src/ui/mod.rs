//! Terminal rendering for Sky Chase.
//!
//! The simulation core works in abstract pixels; everything here maps that
//! space onto terminal cells and draws it.

pub mod game_common;
pub mod game_scene;
pub mod intro_scene;

pub use game_scene::play_area_cells;

use crate::game::{FlightGame, Phase};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

// Smallest terminal the scene layout fits into
const MIN_COLS: u16 = 40;
const MIN_ROWS: u16 = 12;

/// Main UI drawing function, dispatched by phase.
pub fn draw_ui(frame: &mut Frame, game: &FlightGame) {
    let area = frame.size();

    if area.width < MIN_COLS || area.height < MIN_ROWS {
        let notice = Paragraph::new(format!(
            "Terminal too small - need at least {}x{}",
            MIN_COLS, MIN_ROWS
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
        frame.render_widget(notice, area);
        return;
    }

    match game.phase {
        Phase::Intro => intro_scene::render_intro(frame, area),
        // The game-over overlay draws on top of the final play-area frame
        Phase::Playing | Phase::GameOver => game_scene::render_game(frame, area, game),
    }
}
