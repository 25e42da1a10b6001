//! TerminalSurface: the crossterm-backed [`Surface`] implementation.
//!
//! Draw calls land in an off-screen framebuffer; `refresh` diffs it against
//! the previously flushed frame and writes only the changed runs. The
//! `Surface` trait is infallible, so terminal I/O failures are stashed and
//! the driver drains them via [`TerminalSurface::take_io_error`] after the
//! frame loop exits.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use retro_tetris_core::Surface;
use retro_tetris_types::{BOARD_HEIGHT, PANEL_COL};

use crate::fb::{for_each_changed_run, Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette::color_for;

/// Terminal columns per logical cell. Two columns roughly square up the
/// typical terminal glyph aspect ratio.
const CHARS_PER_CELL: u16 = 2;

/// Logical grid footprint: playfield plus border plus the side panel.
const VIEW_COLS: u16 = PANEL_COL as u16 + 9;
const VIEW_ROWS: u16 = BOARD_HEIGHT as u16 + 1;

pub struct TerminalSurface {
    stdout: io::Stdout,
    fb: FrameBuffer,
    prev: FrameBuffer,
    buf: Vec<u8>,
    io_error: Option<anyhow::Error>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        let width = VIEW_COLS * CHARS_PER_CELL;
        Self {
            stdout: io::stdout(),
            fb: FrameBuffer::new(width, VIEW_ROWS),
            prev: FrameBuffer::new(width, VIEW_ROWS),
            buf: Vec::with_capacity(16 * 1024),
            io_error: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// The first terminal I/O failure since the last call, if any.
    pub fn take_io_error(&mut self) -> Option<anyhow::Error> {
        self.io_error.take()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Flush changed runs, then remember the flushed frame for the next diff.
    fn try_refresh(&mut self) -> Result<()> {
        self.buf.clear();
        let buf = &mut self.buf;

        let mut current_style: Option<CellStyle> = None;
        for_each_changed_run(&self.prev, &self.fb, |x, y, len| -> Result<()> {
            buf.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let cell = self.fb.get(x + dx, y).unwrap_or_default();
                if current_style != Some(cell.style) {
                    buf.queue(SetForegroundColor(rgb_to_color(cell.style.fg)))?;
                    buf.queue(SetBackgroundColor(rgb_to_color(cell.style.bg)))?;
                    current_style = Some(cell.style);
                }
                buf.queue(Print(cell.ch))?;
            }
            Ok(())
        })?;
        self.buf.queue(ResetColor)?;

        self.flush_buf()?;
        self.prev.clone_from(&self.fb);
        Ok(())
    }

    fn try_poll_input(&mut self) -> Result<Option<char>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if let Some(input) = map_key(key.code, key.modifiers) {
                    return Ok(Some(input));
                }
            }
        }
        Ok(None)
    }

    fn stash_error(&mut self, error: anyhow::Error) {
        if self.io_error.is_none() {
            self.io_error = Some(error);
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn draw_pixel(&mut self, x: i32, y: i32, color: u8) {
        if x < 0 || y < 0 {
            return;
        }
        let rgb = color_for(color);
        let style = CellStyle { fg: rgb, bg: rgb };
        let px = x as u16 * CHARS_PER_CELL;
        for dx in 0..CHARS_PER_CELL {
            self.fb.set(px + dx, y as u16, Cell { ch: ' ', style });
        }
    }

    fn draw_string(&mut self, row: i32, col: i32, style: u8, text: &str) {
        if row < 0 || col < 0 {
            return;
        }
        let fg = if style == 0 {
            Rgb::new(255, 255, 255)
        } else {
            color_for(style)
        };
        let style = CellStyle {
            fg,
            bg: Rgb::new(0, 0, 0),
        };
        self.fb
            .put_str(col as u16 * CHARS_PER_CELL, row as u16, text, style);
    }

    fn poll_input(&mut self) -> Option<char> {
        match self.try_poll_input() {
            Ok(input) => input,
            Err(error) => {
                self.stash_error(error);
                None
            }
        }
    }

    fn refresh(&mut self) {
        if let Err(error) = self.try_refresh() {
            self.stash_error(error);
        }
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Map a key event to the single-character input alphabet the game speaks.
/// Esc and Ctrl-C both quit; arrows alias the movement keys.
fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<char> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some('q'),
        KeyCode::Char(c) => Some(c.to_ascii_lowercase()),
        KeyCode::Esc => Some('q'),
        KeyCode::Left => Some('a'),
        KeyCode::Right => Some('d'),
        KeyCode::Down => Some('w'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_occupy_two_terminal_columns() {
        let mut surface = TerminalSurface::new();
        surface.draw_pixel(3, 5, 4);

        let rgb = color_for(4);
        for dx in 0..CHARS_PER_CELL {
            let cell = surface.fb.get(3 * CHARS_PER_CELL + dx, 5).unwrap();
            assert_eq!(cell.style.bg, rgb);
            assert_eq!(cell.ch, ' ');
        }
        // Neighboring cells untouched.
        assert_eq!(
            surface.fb.get(3 * CHARS_PER_CELL + 2, 5),
            Some(Cell::default())
        );
    }

    #[test]
    fn negative_coordinates_are_dropped() {
        let mut surface = TerminalSurface::new();
        surface.draw_pixel(-1, 0, 4);
        surface.draw_string(-1, 0, 0, "NEXT");
        assert_eq!(surface.fb, FrameBuffer::new(VIEW_COLS * CHARS_PER_CELL, VIEW_ROWS));
    }

    #[test]
    fn strings_align_with_the_logical_grid() {
        let mut surface = TerminalSurface::new();
        surface.draw_string(3, PANEL_COL, 0, "NEXT");

        let x = PANEL_COL as u16 * CHARS_PER_CELL;
        assert_eq!(surface.fb.get(x, 3).unwrap().ch, 'N');
        assert_eq!(surface.fb.get(x + 3, 3).unwrap().ch, 'T');
    }

    #[test]
    fn key_mapping_covers_the_input_alphabet() {
        assert_eq!(map_key(KeyCode::Char('a'), KeyModifiers::NONE), Some('a'));
        assert_eq!(map_key(KeyCode::Char('A'), KeyModifiers::SHIFT), Some('a'));
        assert_eq!(map_key(KeyCode::Esc, KeyModifiers::NONE), Some('q'));
        assert_eq!(
            map_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some('q')
        );
        assert_eq!(map_key(KeyCode::Left, KeyModifiers::NONE), Some('a'));
        assert_eq!(map_key(KeyCode::Right, KeyModifiers::NONE), Some('d'));
        assert_eq!(map_key(KeyCode::Down, KeyModifiers::NONE), Some('w'));
        assert_eq!(map_key(KeyCode::Enter, KeyModifiers::NONE), None);
    }
}
