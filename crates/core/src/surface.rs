//! The render/input capability the engine draws through.
//!
//! The engine never owns a terminal. Every frame it issues pixel and string
//! draw calls against this trait and ends with [`Surface::refresh`]; the
//! driver pulls input characters through [`Surface::poll_input`]. Swapping
//! in [`NullSurface`] or [`RecordingSurface`] runs the whole game headless.

use std::collections::VecDeque;

/// One frame's worth of drawing plus polled input.
///
/// Coordinates are terminal cells: `draw_pixel` x already includes the border
/// offset, `draw_string` takes (row, col) for side-panel labels. Color follows
/// the index scheme in [`retro_tetris_types`] (0 background, 1-7 pieces,
/// 8 border, 9-15 ghost).
pub trait Surface {
    fn draw_pixel(&mut self, x: i32, y: i32, color: u8);
    fn draw_string(&mut self, row: i32, col: i32, style: u8, text: &str);
    /// One pending input character, if any. Never blocks.
    fn poll_input(&mut self) -> Option<char>;
    /// Flush all queued draw calls to the display.
    fn refresh(&mut self);
}

/// A surface that discards everything. For benchmarks and logic-only tests.
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn draw_pixel(&mut self, _x: i32, _y: i32, _color: u8) {}
    fn draw_string(&mut self, _row: i32, _col: i32, _style: u8, _text: &str) {}
    fn poll_input(&mut self) -> Option<char> {
        None
    }
    fn refresh(&mut self) {}
}

/// A surface that records every call and replays a scripted input sequence.
///
/// Tests use it to assert on the per-frame draw protocol without a terminal.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Every `draw_pixel` call in order.
    pub pixels: Vec<(i32, i32, u8)>,
    /// Every `draw_string` call in order.
    pub strings: Vec<(i32, i32, u8, String)>,
    /// Number of `refresh` calls.
    pub refreshes: u32,
    inputs: VecDeque<char>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue characters to be returned by subsequent `poll_input` calls.
    pub fn script_input(&mut self, chars: &str) {
        self.inputs.extend(chars.chars());
    }

    /// The last color drawn at (x, y), if any pixel landed there.
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<u8> {
        self.pixels
            .iter()
            .rev()
            .find(|&&(px, py, _)| px == x && py == y)
            .map(|&(_, _, color)| color)
    }

    /// Whether any recorded string equals `text`.
    pub fn has_string(&self, text: &str) -> bool {
        self.strings.iter().any(|(_, _, _, s)| s == text)
    }

    /// Forget recorded draw calls (input script is kept).
    pub fn clear_recording(&mut self) {
        self.pixels.clear();
        self.strings.clear();
        self.refreshes = 0;
    }
}

impl Surface for RecordingSurface {
    fn draw_pixel(&mut self, x: i32, y: i32, color: u8) {
        self.pixels.push((x, y, color));
    }

    fn draw_string(&mut self, row: i32, col: i32, style: u8, text: &str) {
        self.strings.push((row, col, style, text.to_string()));
    }

    fn poll_input(&mut self) -> Option<char> {
        self.inputs.pop_front()
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}
