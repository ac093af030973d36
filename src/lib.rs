//! Sky Chase - Terminal Side-Scrolling Arcade Game Library
//!
//! This module exposes the simulation core for testing and external use.

pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod ui;

pub use constants::{MAX_LIVES, PHYSICS_TICK_MS};
pub use game::{FlightGame, FlightInput, Phase};
