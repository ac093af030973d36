//! Input handling: maps terminal events to simulation inputs.
//!
//! Keeps the crossterm types out of the simulation core so the core stays
//! headless-testable.

use crate::game::{FlightInput, Phase};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};

/// What the main loop should do with a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Forward to the simulation.
    Game(FlightInput),
    /// Leave the game.
    Quit,
    /// Swallow the event.
    None,
}

/// Map a key event, phase-aware: Esc quits from the intro and game-over
/// screens but is swallowed mid-flight so a stray press cannot end a run.
/// `q` always quits.
pub fn map_key(key: KeyEvent, phase: Phase) -> InputAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,
        KeyCode::Esc => {
            if phase == Phase::Playing {
                InputAction::None
            } else {
                InputAction::Quit
            }
        }
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
            InputAction::Game(FlightInput::Activate)
        }
        _ => InputAction::Game(FlightInput::Other),
    }
}

/// Any click counts as an activate, mirroring the touch controls of the
/// usual pointer-driven builds of this game.
pub fn map_mouse(mouse: MouseEvent) -> InputAction {
    match mouse.kind {
        MouseEventKind::Down(_) => InputAction::Game(FlightInput::Activate),
        _ => InputAction::None,
    }
}
