use std::env;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use log::{error, info};

use asteroids_clone::constants::{FRAME_MILLIS, POWER_UP_SPAWN_INTERVAL_FRAMES};
use asteroids_clone::input::{self, SimulatedInput};
use asteroids_clone::{Game, GameError, GameResult, Snapshot};

const LOG_FILE: &str = "asteroids-clone.log";
const DEFAULT_DEBUG_FRAMES: u64 = 600;

#[derive(Debug, Default, PartialEq)]
struct LaunchOptions {
    debug_frames: Option<u64>,
    seed: Option<u64>,
    verbose: bool,
}

fn parse_number(value: &str) -> GameResult<u64> {
    value.parse::<u64>().map_err(|_| GameError::invalid_command(value))
}

fn parse_args(args: &[String]) -> GameResult<LaunchOptions> {
    let mut options = LaunchOptions::default();
    let mut iter = args.iter().peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" => {
                let frames = match iter.peek() {
                    Some(next) if !next.starts_with("--") => {
                        let frames = parse_number(next)?;
                        iter.next();
                        frames
                    }
                    _ => DEFAULT_DEBUG_FRAMES,
                };
                options.debug_frames = Some(frames);
            }
            "--seed" => {
                let value = iter.next().ok_or_else(|| GameError::invalid_command("--seed"))?;
                options.seed = Some(parse_number(value)?);
            }
            "--verbose" => options.verbose = true,
            other => return Err(GameError::invalid_command(other)),
        }
    }
    Ok(options)
}

fn status_line(snapshot: &Snapshot) -> String {
    let mut line = format!(
        "Score: {}  Level: {}  Lives: {}  Asteroids: {}  Power-ups: {}",
        snapshot.score,
        snapshot.level,
        snapshot.player.lives,
        snapshot.asteroids.len(),
        snapshot.power_ups.len()
    );
    if snapshot.player.invulnerable {
        line.push_str("  [invulnerable]");
    }
    if let Some(selection) = snapshot.shop_selection {
        line.push_str(&format!("  | SHOP > {}", selection.label()));
    }
    if snapshot.game_over {
        line.push_str("  | GAME OVER (q to quit)");
    }
    line
}

/// One frame of the outer loop: power-up cadence, then the simulation tick.
fn step(game: &mut Game, frame_count: u64) {
    if frame_count % POWER_UP_SPAWN_INTERVAL_FRAMES == 0 && !game.is_game_over() && !game.is_shop_open() {
        game.spawn_power_up();
    }
    game.tick();
}

fn run_headless(game: &mut Game, max_frames: u64) -> GameResult<()> {
    info!("Debug mode enabled. Running {} scripted frames.", max_frames);
    let mut simulated_input = SimulatedInput::demo();
    let mut running = true;
    let mut frame_count = 0;

    while running && frame_count < max_frames {
        if simulated_input.poll(frame_count) {
            while let Some(event) = simulated_input.read() {
                if let Some(command) = input::command_for_event(&event, game.is_shop_open()) {
                    running &= input::dispatch(game, command);
                }
            }
        }

        step(game, frame_count);

        if frame_count % 60 == 0 {
            info!("[frame {}] {}", frame_count, status_line(&game.snapshot()));
        }
        frame_count += 1;
    }

    info!("Headless run finished after {} frames. {}", frame_count, status_line(&game.snapshot()));
    Ok(())
}

fn draw_status(stdout: &mut io::Stdout, snapshot: &Snapshot) -> GameResult<()> {
    execute!(stdout, MoveTo(0, 0), Clear(ClearType::CurrentLine))?;
    write!(stdout, "{}", status_line(snapshot))?;
    stdout.flush()?;
    Ok(())
}

fn terminal_loop(game: &mut Game, stdout: &mut io::Stdout) -> GameResult<()> {
    let mut running = true;
    let mut frame_count = 0;

    while running {
        while event::poll(Duration::ZERO).map_err(|e| { error!("Failed to poll event: {}", e); e })? {
            let event = event::read().map_err(|e| { error!("Failed to read event: {}", e); e })?;
            if let Some(command) = input::command_for_event(&event, game.is_shop_open()) {
                running &= input::dispatch(game, command);
            }
        }

        step(game, frame_count);
        draw_status(stdout, &game.snapshot())?;

        frame_count += 1;
        thread::sleep(Duration::from_millis(FRAME_MILLIS));
    }

    info!("Game loop ended at frame {}. {}", frame_count, status_line(&game.snapshot()));
    Ok(())
}

fn run_terminal(game: &mut Game) -> GameResult<()> {
    info!("Attempting to enable raw mode.");
    enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;
    let mut stdout = io::stdout();
    execute!(stdout, Hide, Clear(ClearType::All))?;

    let result = terminal_loop(game, &mut stdout);

    execute!(stdout, Show).map_err(|e| { error!("Failed to show cursor on exit: {}", e); e })?;
    disable_raw_mode().map_err(|e| { error!("Failed to disable raw mode on exit: {}", e); e })?;
    result
}

fn main() -> GameResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let level = if options.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    simple_logging::log_to_file(LOG_FILE, level)?;
    info!("Starting asteroids-clone with {:?}", options);

    let mut game = match options.seed {
        Some(seed) => Game::new(seed),
        None => Game::from_entropy(),
    };

    let result = match options.debug_frames {
        Some(frames) => run_headless(&mut game, frames),
        None => run_terminal(&mut game),
    };
    if let Err(e) = &result {
        error!("Exiting with error: {}", e);
    }
    result
}
