//! Shared types and constants.
//!
//! Pure data with no external dependencies, usable from the rules engine,
//! the terminal layer, and tests alike.
//!
//! # Cell values
//!
//! Board and shape cells are small integers:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | 0 | empty |
//! | 1–7 | one color per piece type (falling or locked) |
//! | 8 | border |
//! | 9–15 | ghost-preview colors (piece color + 8) |
//!
//! Ghost-shifted values never participate in collision or locking.

/// Board dimensions (playable interior, excluding the border).
pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 20;

/// Width of the border drawn around the play field. Pixel coordinates
/// handed to the render surface are shifted right by this amount.
pub const BORDER_SIZE: i32 = 1;

/// Color index of the border cells.
pub const BORDER_COLOR: u8 = 8;

/// Added to a piece color to obtain its ghost-preview color.
pub const GHOST_SHIFT: u8 = 8;

/// Spawn position of a freshly promoted piece (grid origin).
pub const SPAWN_X: i32 = 4;
pub const SPAWN_Y: i32 = 0;

/// Frame duration of the external pump (~60 FPS).
pub const TICK_MS: u64 = 16;

/// Side-panel layout (terminal cell coordinates).
pub const PANEL_COL: i32 = 15;
pub const NEXT_LABEL_ROW: i32 = 3;
pub const NEXT_PREVIEW_ROW: i32 = 4;
pub const NEXT_PREVIEW_SIZE: i32 = 4;
pub const LEVEL_LABEL_ROW: i32 = 9;
pub const LEVEL_VALUE_ROW: i32 = 10;
pub const SCORE_LABEL_ROW: i32 = 14;
pub const SCORE_VALUE_ROW: i32 = 15;

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// All kinds in color order: `ALL_KINDS[i].color() == i as u8 + 1`.
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

impl PieceKind {
    /// Map a random draw in `0..7` onto a kind.
    pub fn from_index(index: u32) -> Self {
        ALL_KINDS[(index as usize) % ALL_KINDS.len()]
    }

    /// The cell/color value this kind occupies on the board (1–7).
    pub fn color(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }
}

/// The three configurable rotation key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationKeys {
    pub rotate_left: char,
    pub rotate_180: char,
    pub rotate_right: char,
}

impl Default for RotationKeys {
    fn default() -> Self {
        Self {
            rotate_left: 'j',
            rotate_180: 'k',
            rotate_right: 'l',
        }
    }
}
