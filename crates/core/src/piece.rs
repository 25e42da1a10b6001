//! Tetromino shapes and rotation state.
//!
//! Every piece type carries a fixed, ordered list of orientation grids;
//! rotating only moves an index into that list. The grids are data, not
//! control flow: each cell holds either 0 (no pixel) or the piece's color
//! value, so the same grid drives collision, locking, and drawing.

use retro_tetris_types::PieceKind;

/// One orientation of a piece: a small row-major grid of cell values.
pub type ShapeGrid = &'static [&'static [u8]];

/// The full ordered orientation list for one piece type.
type ShapeSet = &'static [ShapeGrid];

/// Placeholder shape of a default-constructed piece: a single opaque cell.
/// Only ever visible transiently before the first spawn.
const PIXEL: ShapeSet = &[&[&[1]]];

const I_SHAPES: ShapeSet = &[
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
];

const O_SHAPES: ShapeSet = &[&[&[2, 2], &[2, 2]]];

const T_SHAPES: ShapeSet = &[
    &[&[0, 3, 0], &[3, 3, 3]],
    &[&[3, 0], &[3, 3], &[3, 0]],
    &[&[3, 3, 3], &[0, 3, 0]],
    &[&[0, 3], &[3, 3], &[0, 3]],
];

const S_SHAPES: ShapeSet = &[
    &[&[0, 4, 4], &[4, 4, 0]],
    &[&[4, 0], &[4, 4], &[0, 4]],
];

const Z_SHAPES: ShapeSet = &[
    &[&[5, 5, 0], &[0, 5, 5]],
    &[&[0, 5], &[5, 5], &[5, 0]],
];

const J_SHAPES: ShapeSet = &[
    &[&[6, 0, 0], &[6, 6, 6]],
    &[&[6, 6], &[6, 0], &[6, 0]],
    &[&[6, 6, 6], &[0, 0, 6]],
    &[&[0, 6], &[0, 6], &[6, 6]],
];

const L_SHAPES: ShapeSet = &[
    &[&[0, 0, 7], &[7, 7, 7]],
    &[&[7, 0], &[7, 0], &[7, 7]],
    &[&[7, 7, 7], &[7, 0, 0]],
    &[&[7, 7], &[0, 7], &[0, 7]],
];

fn shapes_for(kind: PieceKind) -> ShapeSet {
    match kind {
        PieceKind::I => I_SHAPES,
        PieceKind::O => O_SHAPES,
        PieceKind::T => T_SHAPES,
        PieceKind::S => S_SHAPES,
        PieceKind::Z => Z_SHAPES,
        PieceKind::J => J_SHAPES,
        PieceKind::L => L_SHAPES,
    }
}

/// A falling piece: type plus rotation state.
///
/// Pieces are re-initialized in place via [`Tetromino::reset`] on every spawn
/// rather than reallocated; the game keeps exactly one "current" and one
/// "next" instance alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    kind: Option<PieceKind>,
    shapes: ShapeSet,
    rotation: usize,
}

impl Default for Tetromino {
    fn default() -> Self {
        Self {
            kind: None,
            shapes: PIXEL,
            rotation: 0,
        }
    }
}

impl Tetromino {
    pub fn new(kind: PieceKind) -> Self {
        let mut piece = Self::default();
        piece.reset(kind);
        piece
    }

    /// Reassign the type and its orientation list; rotation returns to 0.
    pub fn reset(&mut self, kind: PieceKind) {
        self.kind = Some(kind);
        self.shapes = shapes_for(kind);
        self.rotation = 0;
    }

    /// Advance the rotation state by `delta` (may be negative), wrapping
    /// cyclically over the orientation count of the current type.
    ///
    /// Always succeeds; whether the resulting position is legal on the board
    /// is the caller's concern.
    pub fn rotate(&mut self, delta: i32) {
        self.rotation = self.wrapped(delta);
    }

    /// The grid for the committed rotation state.
    pub fn shape(&self) -> ShapeGrid {
        self.shapes[self.rotation]
    }

    /// The grid `offset` rotation steps away from the committed state,
    /// without committing. Used to probe a rotation before applying it.
    pub fn shape_at(&self, offset: i32) -> ShapeGrid {
        self.shapes[self.wrapped(offset)]
    }

    pub fn kind(&self) -> Option<PieceKind> {
        self.kind
    }

    /// Number of distinct orientations for the current type.
    pub fn orientation_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn rotation_state(&self) -> usize {
        self.rotation
    }

    fn wrapped(&self, delta: i32) -> usize {
        (self.rotation as i32 + delta).rem_euclid(self.shapes.len() as i32) as usize
    }
}
