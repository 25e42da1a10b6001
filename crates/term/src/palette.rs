//! The fixed 16-entry color palette.
//!
//! Index scheme: 0 background, 1-7 piece colors in type order (cyan, yellow,
//! purple, green, red, blue, orange), 8 the border white, and 9-15 the ghost
//! variants of 1-7 at half brightness.

use crate::fb::Rgb;

const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

const PIECE_COLORS: [Rgb; 7] = [
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(128, 0, 128),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 128, 0),
];

const GHOST_COLORS: [Rgb; 7] = [
    Rgb::new(0, 127, 127),
    Rgb::new(127, 127, 0),
    Rgb::new(64, 0, 64),
    Rgb::new(0, 127, 0),
    Rgb::new(127, 0, 0),
    Rgb::new(0, 0, 127),
    Rgb::new(127, 64, 0),
];

/// RGB value for a cell color index. Indices past the ghost range clamp to
/// the background so a corrupt cell never panics the renderer.
pub fn color_for(index: u8) -> Rgb {
    match index {
        0 => BLACK,
        1..=7 => PIECE_COLORS[index as usize - 1],
        8 => WHITE,
        9..=15 => GHOST_COLORS[index as usize - 9],
        _ => BLACK,
    }
}
