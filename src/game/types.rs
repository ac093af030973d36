//! Sky Chase data structures.

use crate::constants::*;
use rand::Rng;
use std::f64::consts::TAU;

/// Session phase. Transitions are linear: Intro -> Playing on the first
/// activate, Playing -> GameOver when the last life is spent, and
/// GameOver -> Playing again via restart. Nothing else is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Playing,
    GameOver,
}

/// The flying character. Horizontal position is fixed; only vertical
/// motion is simulated.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    /// Vertical position in px. y grows downward, screen-style.
    pub y: f64,
    /// Vertical velocity in px/s, positive = falling.
    pub vy: f64,
}

impl Player {
    pub fn new(height: f64) -> Self {
        Self {
            x: PLAYER_X,
            y: height / 2.0,
            vy: 0.0,
        }
    }
}

/// The collectible. Drifts left at the shared star speed while bobbing on a
/// per-instance sine wave anchored at `base_y`. The wave is a pure function
/// of elapsed simulation time, so identical tick sequences replay
/// identically.
#[derive(Debug, Clone)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub base_y: f64,
    /// Wave offset in radians, fixed at spawn.
    pub wave_phase: f64,
    /// Wave frequency in radians per second.
    pub wave_speed: f64,
    /// Wave height in px.
    pub wave_amplitude: f64,
    /// Spin angle in radians. Presentation only; collisions ignore it.
    pub rotation: f64,
}

/// The hazard. At most one exists at any time.
#[derive(Debug, Clone)]
pub struct Alien {
    pub x: f64,
    pub y: f64,
}

/// Main simulation state.
#[derive(Debug, Clone)]
pub struct FlightGame {
    pub phase: Phase,
    pub player: Player,
    /// The live star. Always present while Playing; a replacement spawns in
    /// the same physics step one is caught or missed.
    pub star: Option<Star>,
    /// The live alien, if any.
    pub alien: Option<Alien>,
    /// Countdown to the next alien spawn, in ms. Holding the timer as an
    /// explicit value lets restart cancel a pending spawn outright.
    pub alien_timer_ms: Option<u64>,

    /// Stars caught this playthrough.
    pub score: u32,
    /// Stars missed plus alien hits this playthrough.
    pub missed: u32,
    /// Shared horizontal star speed in px/s. Grows with every catch and
    /// resets on restart.
    pub star_speed: f64,

    // Viewport
    pub width: f64,
    pub height: f64,

    // Timing
    /// Simulated time in ms. Drives the star wave.
    pub elapsed_ms: u64,
    /// Sub-tick accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total physics ticks elapsed.
    pub tick_count: u64,
}

impl FlightGame {
    /// Create a new game in the Intro phase for the given viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            phase: Phase::Intro,
            player: Player::new(height),
            star: None,
            alien: None,
            alien_timer_ms: None,
            score: 0,
            missed: 0,
            star_speed: STAR_SPEED_INITIAL,
            width,
            height,
            elapsed_ms: 0,
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    /// Vertical clamp margin: at least 32 px, scaling with tall viewports.
    pub fn vertical_margin(&self) -> f64 {
        (self.height * VERTICAL_MARGIN_FRAC).max(MIN_VERTICAL_MARGIN)
    }

    /// Highest allowed player y (the ceiling of the flight band).
    pub fn min_y(&self) -> f64 {
        self.vertical_margin()
    }

    /// Lowest allowed player y (the floor of the flight band).
    pub fn max_y(&self) -> f64 {
        self.height - self.vertical_margin()
    }

    pub fn lives_remaining(&self) -> u32 {
        MAX_LIVES.saturating_sub(self.missed)
    }

    /// Replace the current star with a fresh one entering off the right
    /// edge, with randomized wave parameters.
    pub fn spawn_star<R: Rng>(&mut self, rng: &mut R) {
        let base_y = rng.gen_range(STAR_SPAWN_MIN_FRAC..STAR_SPAWN_MAX_FRAC) * self.height;
        self.star = Some(Star {
            x: self.width + SPAWN_MARGIN_X,
            y: base_y,
            base_y,
            wave_phase: rng.gen_range(0.0..TAU),
            wave_speed: rng.gen_range(WAVE_SPEED_MIN..WAVE_SPEED_MAX),
            wave_amplitude: rng.gen_range(WAVE_AMPLITUDE_MIN..WAVE_AMPLITUDE_MAX),
            rotation: 0.0,
        });
    }

    /// Spawn the alien off the right edge at a random height within the
    /// same band stars use.
    pub fn spawn_alien<R: Rng>(&mut self, rng: &mut R) {
        let y = rng.gen_range(STAR_SPAWN_MIN_FRAC..STAR_SPAWN_MAX_FRAC) * self.height;
        self.alien = Some(Alien {
            x: self.width + SPAWN_MARGIN_X,
            y,
        });
    }

    /// Update the viewport, pulling the player back inside the flight band
    /// if the new bounds cut it off.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.player.y = self.player.y.clamp(self.min_y(), self.max_y());
    }
}
