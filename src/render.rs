//! Box-drawing rendering of a display grid

use itertools::Itertools;

use crate::direction::Sides;
use crate::display::DisplayGrid;
use crate::grid::Pos;

/// Glyph for every connectivity bitmask, indexed by [Sides::bits].
///
/// A single connection draws the straight line of its axis, no
/// connection draws blank space.
pub const GLYPHS: [char; 16] = [
    ' ',        // none
    '\u{2502}', // N          │
    '\u{2502}', // S          │
    '\u{2502}', // N S        │
    '\u{2500}', // E          ─
    '\u{2514}', // N E        └
    '\u{250C}', // S E        ┌
    '\u{251C}', // N S E      ├
    '\u{2500}', // W          ─
    '\u{2518}', // N W        ┘
    '\u{2510}', // S W        ┐
    '\u{2524}', // N S W      ┤
    '\u{2500}', // E W        ─
    '\u{2534}', // N E W      ┴
    '\u{252C}', // S E W      ┬
    '\u{253C}', // N S E W    ┼
];

/// Glyph drawn for a cell connected on `sides`
pub fn glyph(sides: Sides) -> char {
    GLYPHS[usize::from(sides.bits() & 0b1111)]
}

/// One glyph per display cell, row by row
pub fn glyph_rows(display: &DisplayGrid) -> Vec<Vec<char>> {
    let tiles = display.tiles();
    (0..tiles.height())
        .map(|y| {
            (0..tiles.width())
                .map(|x| glyph(display.connections(Pos::new(x, y))))
                .collect()
        })
        .collect()
}

/// Render the maze as text, one line per row, each line ending in a
/// line break.
pub fn render(display: &DisplayGrid) -> String {
    glyph_rows(display)
        .iter()
        .map(|row| format!("{}\n", row.iter().join("")))
        .collect()
}
