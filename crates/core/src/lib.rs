//! Core rules engine - pure, deterministic, and testable
//!
//! This crate owns all game rules and state: the play-field grid, piece
//! geometry and rotation, collision, locking, line clearing, scoring, and
//! level-based speed progression. It performs no I/O of its own; rendering
//! and input go through the injected [`Surface`] capability, so the whole
//! engine can run headlessly in tests and benchmarks.
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 grid with row-clearing and top-out detection
//! - [`game`]: the game state machine (spawn, move, lock, clear, level)
//! - [`piece`]: tetromino shape tables and rotation state
//! - [`rng`]: seedable LCG injected for deterministic piece sequences
//! - [`scoring`]: classic line-score table and the frames-per-drop speed curve
//! - [`surface`]: the render/input capability the engine draws through
//!
//! # Game Rules
//!
//! This implementation follows the classic ruleset:
//!
//! - **Uniform randomizer**: each spawn draws uniformly from the 7 types,
//!   with a single repeat-avoidance retry (not a bag)
//! - **Plain rotation**: a rotation that would collide is ignored; there is
//!   no wall-kick search
//! - **Classic scoring**: 40/100/300/1200 times (level + 1)
//! - **NES-style gravity**: the fall interval is a frame count derived from
//!   the level; negative levels never auto-fall (practice mode)
//! - **Ghost piece**: drawn each frame at the hard-drop resting row

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod surface;

pub use retro_tetris_types as types;

pub use board::Board;
pub use game::Game;
pub use piece::{ShapeGrid, Tetromino};
pub use rng::SimpleRng;
pub use scoring::{fall_interval_for_level, line_clear_score};
pub use surface::{NullSurface, RecordingSurface, Surface};
