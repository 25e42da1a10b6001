//! Terminal rendering backend.
//!
//! Implements the `Surface` trait from the core crate on top of crossterm:
//! a fixed-size framebuffer, a 16-entry palette, and a diff flush that only
//! rewrites changed cell runs. The core crate never touches a terminal; this
//! crate never touches game rules.

pub mod fb;
pub mod palette;
pub mod surface;

pub use retro_tetris_core as core;
pub use retro_tetris_types as types;

pub use fb::{for_each_changed_run, Cell, CellStyle, FrameBuffer, Rgb};
pub use palette::color_for;
pub use surface::TerminalSurface;
