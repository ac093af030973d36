use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skychase::build_info;
use skychase::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use skychase::game::{process_input, tick_flight, FlightGame};
use skychase::input::{map_key, map_mouse, InputAction};
use skychase::ui;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skychase {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Sky Chase - Terminal Side-Scrolling Arcade Game\n");
                println!("Usage: skychase\n");
                println!("Controls:");
                println!("  Space/Up/Enter/click  Fly");
                println!("  Q                     Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skychase --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Cleanup terminal even if the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut game = FlightGame::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);

    let size = terminal.size()?;
    sync_viewport(&mut game, size.width, size.height);

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &game))?;

        // Short poll keeps the tick cadence steady while idle
        if event::poll(Duration::from_millis(8))? {
            match event::read()? {
                Event::Key(key) => match map_key(key, game.phase) {
                    InputAction::Quit => break,
                    InputAction::Game(input) => process_input(&mut game, input, &mut rng),
                    InputAction::None => {}
                },
                Event::Mouse(mouse) => {
                    if let InputAction::Game(input) = map_mouse(mouse) {
                        process_input(&mut game, input, &mut rng);
                    }
                }
                Event::Resize(cols, rows) => sync_viewport(&mut game, cols, rows),
                _ => {}
            }
        }

        let dt_ms = last_tick.elapsed().as_millis() as u64;
        if dt_ms > 0 {
            last_tick = Instant::now();
            tick_flight(&mut game, dt_ms, &mut rng);
        }
    }

    Ok(())
}

/// Map the terminal play area onto the simulation viewport.
fn sync_viewport(game: &mut FlightGame, cols: u16, rows: u16) {
    let (cells_w, cells_h) = ui::play_area_cells(cols, rows);
    game.resize(
        cells_w.max(1) as f64 * CELL_WIDTH_PX,
        cells_h.max(1) as f64 * CELL_HEIGHT_PX,
    );
}
