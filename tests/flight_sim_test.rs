//! Behavior tests for the flight simulation core: scoring, lives, alien
//! scheduling, and phase transitions, exercised through the public API the
//! way the main loop drives it.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skychase::constants::{
    ALIEN_DELAY_MAX_MS, ALIEN_DELAY_MIN_MS, OFFSCREEN_X, PHYSICS_TICK_MS, SPAWN_MARGIN_X,
    STAR_SPEED_INCREMENT, STAR_SPEED_INITIAL,
};
use skychase::game::{
    fly, process_input, restart, tick_flight, Alien, FlightGame, FlightInput, Phase, Star,
};
use skychase::MAX_LIVES;

const WIDTH: f64 = 1280.0;
const HEIGHT: f64 = 720.0;

fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A game taken through the intro, ready to fly.
fn started_game(rng: &mut ChaCha8Rng) -> FlightGame {
    let mut game = FlightGame::new(WIDTH, HEIGHT);
    process_input(&mut game, FlightInput::Activate, rng);
    game
}

/// A star parked dead-on the player with a flat wave, so the next physics
/// step registers a catch.
fn star_on_player(game: &FlightGame) -> Star {
    Star {
        x: game.player.x,
        y: game.player.y,
        base_y: game.player.y,
        wave_phase: 0.0,
        wave_speed: 0.0,
        wave_amplitude: 0.0,
        rotation: 0.0,
    }
}

#[test]
fn test_lives_never_increase_within_a_run() {
    let mut rng = seeded(7);
    let mut game = started_game(&mut rng);

    let mut prev_lives = game.lives_remaining();
    for i in 0..20_000u32 {
        if i % 20 == 0 {
            fly(&mut game);
        }
        tick_flight(&mut game, PHYSICS_TICK_MS, &mut rng);

        let lives = game.lives_remaining();
        assert!(lives <= prev_lives, "lives went up mid-run");
        assert!(lives <= MAX_LIVES);
        prev_lives = lives;

        if game.phase == Phase::GameOver {
            assert_eq!(lives, 0);
            return;
        }
    }
}

#[test]
fn test_score_increments_by_one_per_catch() {
    let mut rng = seeded(11);
    let mut game = started_game(&mut rng);
    game.alien_timer_ms = Some(600_000);

    for expected in 1..=5u32 {
        game.star = Some(star_on_player(&game));
        tick_flight(&mut game, PHYSICS_TICK_MS, &mut rng);

        assert_eq!(game.score, expected);
        let expected_speed = STAR_SPEED_INITIAL + STAR_SPEED_INCREMENT * expected as f64;
        assert!((game.star_speed - expected_speed).abs() < f64::EPSILON);
    }
    assert_eq!(game.missed, 0);
}

#[test]
fn test_star_speed_monotonic_until_restart() {
    let mut rng = seeded(13);
    let mut game = started_game(&mut rng);

    let mut prev_speed = game.star_speed;
    for i in 0..10_000u32 {
        if i % 15 == 0 {
            fly(&mut game);
        }
        tick_flight(&mut game, PHYSICS_TICK_MS, &mut rng);
        assert!(game.star_speed >= prev_speed, "star speed decreased mid-run");
        prev_speed = game.star_speed;
        if game.phase == Phase::GameOver {
            break;
        }
    }

    restart(&mut game, &mut rng);
    assert!((game.star_speed - STAR_SPEED_INITIAL).abs() < f64::EPSILON);
}

#[test]
fn test_at_most_one_alien_in_play_or_on_deck() {
    let mut rng = seeded(17);
    let mut game = started_game(&mut rng);

    for i in 0..30_000u32 {
        if i % 18 == 0 {
            fly(&mut game);
        }
        tick_flight(&mut game, PHYSICS_TICK_MS, &mut rng);

        // A live alien and an armed spawn timer never coexist
        assert!(
            !(game.alien.is_some() && game.alien_timer_ms.is_some()),
            "alien alive while another spawn was pending"
        );
        if game.phase == Phase::GameOver {
            break;
        }
    }
}

#[test]
fn test_restart_matches_fresh_start_shape() {
    let mut rng = seeded(19);
    let mut game = started_game(&mut rng);

    // Play a while, then die
    for _ in 0..5000u32 {
        tick_flight(&mut game, PHYSICS_TICK_MS, &mut rng);
        if game.phase == Phase::GameOver {
            break;
        }
    }

    // A stray key does not restart; the activate class does
    process_input(&mut game, FlightInput::Other, &mut rng);
    assert_eq!(game.phase, Phase::GameOver);

    process_input(&mut game, FlightInput::Activate, &mut rng);

    assert_eq!(game.phase, Phase::Playing);
    assert_eq!(game.score, 0);
    assert_eq!(game.missed, 0);
    assert_eq!(game.lives_remaining(), MAX_LIVES);
    assert!((game.star_speed - STAR_SPEED_INITIAL).abs() < f64::EPSILON);
    assert!(game.star.is_some());
    assert!(game.alien.is_none());
    let delay = game.alien_timer_ms.expect("hazard should be scheduled");
    assert!((ALIEN_DELAY_MIN_MS..ALIEN_DELAY_MAX_MS).contains(&delay));
    assert_eq!(game.elapsed_ms, 0);
}

#[test]
fn test_player_never_leaves_flight_band() {
    let mut rng = seeded(23);
    let mut game = started_game(&mut rng);
    game.alien_timer_ms = Some(600_000);

    // Free fall the whole way: the floor clamp has to hold on its own
    for _ in 0..5000u32 {
        tick_flight(&mut game, PHYSICS_TICK_MS, &mut rng);
        assert!(game.player.y >= game.min_y());
        assert!(game.player.y <= game.max_y());
        if game.phase == Phase::GameOver {
            break;
        }
    }
}

#[test]
fn test_three_missed_stars_end_the_game() {
    let mut rng = seeded(29);
    let mut game = started_game(&mut rng);
    // Push the alien far out so only star misses spend lives
    game.alien_timer_ms = Some(600_000);

    // Never fly: the player sinks to the floor, below the star band, and
    // every star sails past
    let mut ticks = 0u32;
    while game.phase == Phase::Playing {
        tick_flight(&mut game, PHYSICS_TICK_MS, &mut rng);
        ticks += 1;
        assert!(ticks < 10_000, "run should have ended after three misses");
    }

    assert_eq!(game.phase, Phase::GameOver);
    assert_eq!(game.missed, MAX_LIVES);
    assert_eq!(game.lives_remaining(), 0);
    assert_eq!(game.score, 0);
}

#[test]
fn test_fly_during_intro_changes_nothing() {
    let mut rng = seeded(31);
    let mut game = FlightGame::new(WIDTH, HEIGHT);
    let y_before = game.player.y;

    fly(&mut game);
    assert!(!tick_flight(&mut game, 100, &mut rng));

    assert_eq!(game.phase, Phase::Intro);
    assert!((game.player.y - y_before).abs() < f64::EPSILON);
    assert!((game.player.vy - 0.0).abs() < f64::EPSILON);
    assert!(game.star.is_none());
}

#[test]
fn test_missed_star_is_replaced_from_the_right() {
    let mut rng = seeded(37);
    let mut game = started_game(&mut rng);
    game.alien_timer_ms = Some(600_000);
    game.star.as_mut().unwrap().x = OFFSCREEN_X + 1.0;

    tick_flight(&mut game, PHYSICS_TICK_MS, &mut rng);

    assert_eq!(game.missed, 1);
    let star = game.star.as_ref().expect("replacement star should spawn");
    assert!((star.x - (WIDTH + SPAWN_MARGIN_X)).abs() < f64::EPSILON);
}

#[test]
fn test_alien_collision_reschedules_spawn() {
    let mut rng = seeded(41);
    let mut game = started_game(&mut rng);
    game.alien_timer_ms = None;
    game.alien = Some(Alien {
        x: game.player.x,
        y: game.player.y,
    });

    tick_flight(&mut game, PHYSICS_TICK_MS, &mut rng);

    assert!(game.alien.is_none());
    assert_eq!(game.missed, 1);
    let delay = game.alien_timer_ms.expect("next alien should be scheduled");
    assert!((ALIEN_DELAY_MIN_MS..ALIEN_DELAY_MAX_MS).contains(&delay));
}

#[test]
fn test_game_over_freezes_the_world() {
    let mut rng = seeded(43);
    let mut game = started_game(&mut rng);
    game.phase = Phase::GameOver;
    let star_x = game.star.as_ref().unwrap().x;
    let player_y = game.player.y;

    assert!(!tick_flight(&mut game, 100, &mut rng));

    assert!((game.star.as_ref().unwrap().x - star_x).abs() < f64::EPSILON);
    assert!((game.player.y - player_y).abs() < f64::EPSILON);
}
