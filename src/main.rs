use std::io;
use std::panic;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{THEME_CLASSIC, TICK_INTERVAL_MS, Theme, theme_by_name};
use grid_snake::engine::{GameState, Status};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer;
use grid_snake::score::{load_high_score, save_high_score};
use grid_snake::terminal_runtime::{TerminalSession, cleanup_terminal_best_effort};
use grid_snake::ui::hud::HudInfo;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Keyboard poll timeout; also paces the render loop between ticks.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for food placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme: classic, ocean, or neon.
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let theme = match cli.theme.as_deref() {
        Some(name) => match theme_by_name(name) {
            Some(theme) => theme,
            None => {
                eprintln!("Unknown theme '{name}'; available: classic, ocean, neon");
                process::exit(2);
            }
        },
        None => &THEME_CLASSIC,
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Load before entering raw mode so a warning is still readable.
    let high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("Failed to load high score: {error}");
            0
        }
    };

    install_panic_hook();
    run(rng, theme, high_score)
}

fn run(mut rng: StdRng, theme: &'static Theme, mut high_score: u32) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut state = GameState::new(&mut rng);

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();
    let mut last_status = state.status;

    loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(frame, &state, HudInfo { high_score, theme });
        })?;

        if let Some(game_input) = input.poll_input(INPUT_POLL_INTERVAL)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => state = state.queue_direction(direction),
                GameInput::Pause => state = state.toggle_pause(),
                GameInput::Restart => {
                    state = GameState::restart(&mut rng);
                    last_tick = Instant::now();
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            state = state.tick(&mut rng);
            last_tick = Instant::now();
        }

        if state.status != last_status {
            if state.status == Status::Ended && state.score > high_score {
                high_score = state.score;
                if let Err(error) = save_high_score(high_score) {
                    eprintln!("Failed to save high score: {error}");
                }
            }

            last_status = state.status;
        }
    }

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
