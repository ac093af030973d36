// Simulation timing
pub const PHYSICS_TICK_MS: u64 = 16; // fixed step, ~60 Hz
pub const MAX_FRAME_DT_MS: u64 = 100;

// Player motion (abstract pixels, y grows downward)
pub const GRAVITY: f64 = 900.0; // px/s^2
pub const FLY_VELOCITY: f64 = -350.0; // px/s, set outright on each fly
pub const FLOOR_IMPULSE: f64 = -30.0; // upward kick applied at the lower bound
pub const PLAYER_X: f64 = 100.0;
pub const PLAYER_HALF_WIDTH: f64 = 24.0;
pub const PLAYER_HALF_HEIGHT: f64 = 24.0;

// Star tuning
pub const STAR_SPEED_INITIAL: f64 = 200.0; // px/s
pub const STAR_SPEED_INCREMENT: f64 = 10.0; // added per star caught
pub const STAR_HALF_EXTENT: f64 = 16.0;
pub const STAR_ROTATION_STEP: f64 = 0.008; // radians per physics tick
pub const STAR_SPAWN_MIN_FRAC: f64 = 0.2; // vertical spawn band, fraction of height
pub const STAR_SPAWN_MAX_FRAC: f64 = 0.8;
pub const WAVE_SPEED_MIN: f64 = 0.8; // radians per second
pub const WAVE_SPEED_MAX: f64 = 1.3;
pub const WAVE_AMPLITUDE_MIN: f64 = 36.0; // px
pub const WAVE_AMPLITUDE_MAX: f64 = 60.0;

// Alien tuning
pub const ALIEN_SPEED_BONUS: f64 = 100.0; // added to the current star speed
pub const ALIEN_SPEED_FACTOR: f64 = 3.0;
pub const ALIEN_HALF_EXTENT: f64 = 20.0;
pub const ALIEN_DELAY_MIN_MS: u64 = 2500;
pub const ALIEN_DELAY_MAX_MS: u64 = 7000;

// Screen bounds
pub const OFFSCREEN_X: f64 = -32.0; // entities past this are gone
pub const SPAWN_MARGIN_X: f64 = 32.0; // entities enter this far off the right edge
pub const MIN_VERTICAL_MARGIN: f64 = 32.0;
pub const VERTICAL_MARGIN_FRAC: f64 = 0.04;

// Lives
pub const MAX_LIVES: u32 = 3;

// Terminal cell to abstract pixel mapping (cells are roughly 1:2)
pub const CELL_WIDTH_PX: f64 = 16.0;
pub const CELL_HEIGHT_PX: f64 = 32.0;

// Fallback viewport before the first resize
pub const DEFAULT_WIDTH: f64 = 1280.0;
pub const DEFAULT_HEIGHT: f64 = 720.0;
