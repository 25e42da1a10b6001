//! Retro terminal Tetris (workspace facade crate).
//!
//! This package keeps a stable `retro_tetris::{core,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use retro_tetris_core as core;
pub use retro_tetris_term as term;
pub use retro_tetris_types as types;
