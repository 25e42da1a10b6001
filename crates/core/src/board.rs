//! The play-field grid.
//!
//! A fixed 20x10 grid of cell values, row-major with row 0 at the top.
//! Dimensions never change after construction; only cell contents mutate,
//! through piece locking and line clearing.

use arrayvec::ArrayVec;

use retro_tetris_types::{BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board. Cell values follow the color-index scheme from
/// [`retro_tetris_types`]: 0 empty, 1-7 locked piece colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [[u8; WIDTH]; HEIGHT],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            rows: [[0; WIDTH]; HEIGHT],
        }
    }

    pub fn width(&self) -> i32 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> i32 {
        BOARD_HEIGHT
    }

    /// Cell value at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Set the cell at (x, y). Returns false when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = value;
        true
    }

    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_WIDTH && y >= 0 && y < BOARD_HEIGHT
    }

    /// Whether the cell at (x, y) is on the board and occupied.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(value) if value != 0)
    }

    /// Whether row `y` contains no empty cell.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.rows[y].iter().all(|&cell| cell != 0)
    }

    /// Remove row `y` and insert a fresh empty row at the top: rows above
    /// shift down by one, rows below keep their index.
    pub fn clear_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }
        for row in (1..=y).rev() {
            self.rows[row] = self.rows[row - 1];
        }
        self.rows[0] = [0; WIDTH];
    }

    /// Clear every full row in a single forward pass, returning the scan
    /// indices at which a clear happened (top to bottom).
    ///
    /// The scan continues downward over the post-removal indices, exactly
    /// like erasing from a growable row list while iterating: a row shifted
    /// into an already-visited slot is not revisited within this call.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, HEIGHT> {
        let mut cleared = ArrayVec::new();
        for y in 0..HEIGHT {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared.push(y);
            }
        }
        cleared
    }

    /// Top-out probe: whether any cell of the topmost row is occupied.
    pub fn top_row_occupied(&self) -> bool {
        self.rows[0].iter().any(|&cell| cell != 0)
    }

    /// Row-major view of the grid, for rendering.
    pub fn rows(&self) -> &[[u8; WIDTH]; HEIGHT] {
        &self.rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
