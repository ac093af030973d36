//! Sky Chase game logic: flight physics, star and alien movement, collision
//! detection, lives bookkeeping, and phase transitions.

use super::types::{FlightGame, Phase, Player};
use crate::constants::*;
use rand::Rng;

/// UI-agnostic input actions.
///
/// The game has a single "activate" control. Depending on the phase it
/// dismisses the intro, flies, or restarts; every other key is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightInput {
    /// Space, Up, Enter, or a mouse click.
    Activate,
    /// Any other key.
    Other,
}

/// Route an input event according to the current phase. Only the activate
/// class does anything; stray keys are swallowed in every phase.
pub fn process_input<R: Rng>(game: &mut FlightGame, input: FlightInput, rng: &mut R) {
    if !matches!(input, FlightInput::Activate) {
        return;
    }
    match game.phase {
        // Activate dismisses the intro and starts the run
        Phase::Intro => restart(game, rng),
        Phase::Playing => fly(game),
        Phase::GameOver => restart(game, rng),
    }
}

/// Kick the player upward. The velocity is set, not added, so mashing the
/// key never stacks impulses.
pub fn fly(game: &mut FlightGame) {
    if game.phase != Phase::Playing {
        return;
    }
    game.player.vy = FLY_VELOCITY;
}

/// Reset to a fresh run: zeroed score and misses, initial star speed, a new
/// star entering from the right, and an alien spawn scheduled. Any pending
/// alien timer from the previous run is cancelled. Also serves as the
/// initial start out of the intro.
pub fn restart<R: Rng>(game: &mut FlightGame, rng: &mut R) {
    game.score = 0;
    game.missed = 0;
    game.star_speed = STAR_SPEED_INITIAL;
    game.alien = None;
    game.alien_timer_ms = None;
    game.elapsed_ms = 0;
    game.accumulated_time_ms = 0;
    game.tick_count = 0;
    game.player = Player::new(game.height);
    game.spawn_star(rng);
    schedule_alien(game, rng);
    game.phase = Phase::Playing;
}

/// Arm the alien spawn timer with a random delay. No-op while an alien is
/// alive or a timer is already pending, so there is never more than one
/// alien in flight or on deck.
pub fn schedule_alien<R: Rng>(game: &mut FlightGame, rng: &mut R) {
    if game.alien.is_some() || game.alien_timer_ms.is_some() {
        return;
    }
    game.alien_timer_ms = Some(rng.gen_range(ALIEN_DELAY_MIN_MS..ALIEN_DELAY_MAX_MS));
}

/// Advance the simulation. Called from the main loop with wall-clock
/// `dt_ms`; internally steps physics in fixed 16ms increments (~60 FPS).
/// Returns true if the game state changed.
pub fn tick_flight<R: Rng>(game: &mut FlightGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.phase != Phase::Playing {
        return false;
    }

    // Clamp dt to 100ms max to prevent physics explosion after pause/lag
    let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);

    game.accumulated_time_ms += dt_ms;
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step_physics(game, rng);
        changed = true;

        if game.phase != Phase::Playing {
            break;
        }
    }

    changed
}

/// Single physics step (16ms tick).
fn step_physics<R: Rng>(game: &mut FlightGame, rng: &mut R) {
    let dt = PHYSICS_TICK_MS as f64 / 1000.0;
    game.tick_count += 1;
    game.elapsed_ms += PHYSICS_TICK_MS;

    // 1. Alien spawn countdown. The occupancy check keeps a stale timer
    //    from double-spawning.
    if let Some(remaining) = game.alien_timer_ms {
        let remaining = remaining.saturating_sub(PHYSICS_TICK_MS);
        if remaining == 0 {
            game.alien_timer_ms = None;
            if game.alien.is_none() {
                game.spawn_alien(rng);
            }
        } else {
            game.alien_timer_ms = Some(remaining);
        }
    }

    // 2. Player gravity (semi-implicit Euler)
    game.player.vy += GRAVITY * dt;
    game.player.y += game.player.vy * dt;

    // 3. Keep the player inside the flight band. The floor nudge keeps the
    //    sprite from visually sticking to the lower bound.
    let min_y = game.min_y();
    let max_y = game.max_y();
    if game.player.y >= max_y {
        game.player.y = max_y - 1.0;
        game.player.vy = FLOOR_IMPULSE;
    } else if game.player.y <= min_y {
        game.player.y = min_y;
        game.player.vy = 0.0;
    }

    // 4. Star drift, wave bob, spin. The bob is computed from elapsed time,
    //    not integrated, so replays are exact.
    let t = game.elapsed_ms as f64 / 1000.0;
    if let Some(star) = &mut game.star {
        star.x -= game.star_speed * dt;
        star.y = star.base_y + star.wave_amplitude * (t * star.wave_speed + star.wave_phase).sin();
        star.rotation += STAR_ROTATION_STEP;
    }

    // 5. Missed star: it crossed the left edge uncaught
    if game.star.as_ref().is_some_and(|s| s.x < OFFSCREEN_X) {
        game.star = None;
        if lose_life(game) {
            return;
        }
        game.spawn_star(rng);
    }

    // 6. Alien drift; off-screen aliens despawn and the next one is scheduled
    if let Some(alien) = &mut game.alien {
        alien.x -= (game.star_speed + ALIEN_SPEED_BONUS) * ALIEN_SPEED_FACTOR * dt;
    }
    if game.alien.as_ref().is_some_and(|a| a.x < OFFSCREEN_X) {
        game.alien = None;
        schedule_alien(game, rng);
    }

    // 7. Star catch
    if game
        .star
        .as_ref()
        .is_some_and(|s| player_overlaps(&game.player, s.x, s.y, STAR_HALF_EXTENT))
    {
        game.star = None;
        game.score += 1;
        game.star_speed += STAR_SPEED_INCREMENT;
        game.spawn_star(rng);
    }

    // 8. Alien hit
    if game
        .alien
        .as_ref()
        .is_some_and(|a| player_overlaps(&game.player, a.x, a.y, ALIEN_HALF_EXTENT))
    {
        game.alien = None;
        if lose_life(game) {
            return;
        }
        schedule_alien(game, rng);
    }
}

/// Spend one life. Returns true when it was the last one and the run ends.
fn lose_life(game: &mut FlightGame) -> bool {
    game.missed += 1;
    if game.missed >= MAX_LIVES {
        game.phase = Phase::GameOver;
        return true;
    }
    false
}

/// Axis-aligned bounding-box overlap between the player and a square entity
/// of the given half extent centered at (x, y).
fn player_overlaps(player: &Player, x: f64, y: f64, half_extent: f64) -> bool {
    (player.x - x).abs() < PLAYER_HALF_WIDTH + half_extent
        && (player.y - y).abs() < PLAYER_HALF_HEIGHT + half_extent
}
