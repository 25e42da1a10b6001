//! Classic scoring and the level speed curve.

/// Points for clearing k lines in one pass, before the level multiplier.
/// Index 4 also covers any hypothetical clear of more than 4 lines.
pub const LINE_SCORES: [i64; 5] = [0, 40, 100, 300, 1200];

/// Lines required to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Score delta for clearing `lines` rows in a single pass at `level`.
///
/// `level` is the level before any level-up triggered by this clear.
pub fn line_clear_score(lines: usize, level: i32) -> i64 {
    LINE_SCORES[lines.min(4)] * (level as i64 + 1)
}

/// Frames between automatic downward steps for `level`.
///
/// NES-style curve: 48 frames at level 0 shrinking to 1 frame at level 29+.
/// Negative levels are practice mode: the piece never auto-falls.
pub fn fall_interval_for_level(level: i32) -> i32 {
    if level < 0 {
        return i32::MAX;
    }
    match level {
        0 => 48,
        1 => 43,
        2 => 38,
        3 => 33,
        4 => 28,
        5 => 23,
        6 => 18,
        7 => 13,
        8 => 8,
        9 => 6,
        10..=12 => 5,
        13..=15 => 4,
        16..=18 => 3,
        19..=28 => 2,
        _ => 1,
    }
}
