//! Terminal Tetris runner.
//!
//! Fixed-rate frame loop: drain input, advance and redraw the game, and step
//! the falling piece whenever the level's fall interval has elapsed.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use retro_tetris::core::{Game, SimpleRng, Surface};
use retro_tetris::term::TerminalSurface;
use retro_tetris::types::{RotationKeys, TICK_MS};

#[derive(Debug, Parser)]
#[command(about = "Classic falling-block game for the terminal")]
struct Args {
    /// Starting level. Negative levels disable automatic falling.
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    level: i32,

    /// Key for rotating counterclockwise.
    #[arg(long, default_value_t = 'j')]
    rotate_left: char,

    /// Key for rotating half a turn.
    #[arg(long, default_value_t = 'k')]
    rotate_180: char,

    /// Key for rotating clockwise.
    #[arg(long, default_value_t = 'l')]
    rotate_right: char,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut surface = TerminalSurface::new();
    surface.enter()?;

    let result = run(&args, &mut surface);

    // Always try to restore terminal state.
    let _ = surface.exit();
    result
}

fn run(args: &Args, surface: &mut TerminalSurface) -> Result<()> {
    let mut game = Game::new(surface, SimpleRng::from_entropy());
    game.set_level(args.level);
    game.set_rotation_keys(RotationKeys {
        rotate_left: args.rotate_left,
        rotate_180: args.rotate_180,
        rotate_right: args.rotate_right,
    });

    let tick = Duration::from_millis(TICK_MS);
    let mut frames: i32 = 0;

    while !game.is_stopped() {
        while let Some(input) = surface.poll_input() {
            game.handle_input(input);
        }

        game.update(surface);
        if let Some(error) = surface.take_io_error() {
            return Err(error);
        }

        frames = frames.saturating_add(1);
        if game.fall_interval() < frames {
            game.move_down();
            frames = 0;
        }

        thread::sleep(tick);
    }

    Ok(())
}
