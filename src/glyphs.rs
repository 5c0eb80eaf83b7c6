//! Tiny 3×5 bitmap font for drawing labels on the GPU.
//!
//! Each glyph packs into 15 bits of a `u32`: row `r` (0 = top) occupies bits
//! `3r..3r+3`, with the leftmost column in the highest of the three bits. The
//! fragment shader tests bit `3r + (2 - c)` for column `c`.
//!
//! Lowercase letters use their uppercase shape. Characters without a shape
//! pack to zero and render as a blank cell.

/// Most glyphs drawn per label. Longer labels are truncated.
pub const MAX_GLYPHS: usize = 4;

/// Columns per glyph.
pub const GLYPH_COLS: u32 = 3;

/// Rows per glyph.
pub const GLYPH_ROWS: u32 = 5;

/// Rows of a glyph, top to bottom, three bits each with the left column in bit 2.
type Rows = [u8; 5];

const fn pack(rows: Rows) -> u32 {
    let mut mask = 0u32;
    let mut r = 0;
    while r < 5 {
        mask |= ((rows[r] & 0b111) as u32) << (r * 3);
        r += 1;
    }
    mask
}

/// Shape of a printable character, if the font has one.
fn rows_for(c: char) -> Option<Rows> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b110, 0b001, 0b010, 0b100, 0b111],
        '3' => [0b110, 0b001, 0b010, 0b001, 0b110],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b110, 0b001, 0b110],
        '6' => [0b011, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b110],
        '{' => [0b011, 0b010, 0b110, 0b010, 0b011],
        '}' => [0b110, 0b010, 0b011, 0b010, 0b110],
        '[' => [0b110, 0b100, 0b100, 0b100, 0b110],
        ']' => [0b011, 0b001, 0b001, 0b001, 0b011],
        '(' => [0b010, 0b100, 0b100, 0b100, 0b010],
        ')' => [0b010, 0b001, 0b001, 0b001, 0b010],
        '<' => [0b001, 0b010, 0b100, 0b010, 0b001],
        '>' => [0b100, 0b010, 0b001, 0b010, 0b100],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '&' => [0b010, 0b101, 0b010, 0b101, 0b011],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        ';' => [0b000, 0b010, 0b000, 0b010, 0b100],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b110, 0b001, 0b010, 0b000, 0b010],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '*' => [0b101, 0b010, 0b111, 0b010, 0b101],
        _ => return None,
    };
    Some(rows)
}

/// Packed bitmask for one character. Zero means blank.
pub fn glyph_mask(c: char) -> u32 {
    rows_for(c).map(pack).unwrap_or(0)
}

/// Whether the font can draw `c`.
pub fn has_glyph(c: char) -> bool {
    rows_for(c).is_some()
}

/// Glyph masks for a label, padded with blanks, plus the number of cells used.
///
/// Spaces and unknown characters still occupy a cell so spacing matches the
/// label. Characters past [`MAX_GLYPHS`] are dropped.
pub fn pack_label(label: &str) -> ([u32; MAX_GLYPHS], u32) {
    let mut masks = [0u32; MAX_GLYPHS];
    let mut count = 0u32;
    for (slot, c) in masks.iter_mut().zip(label.chars()) {
        *slot = glyph_mask(c);
        count += 1;
    }
    (masks, count)
}

/// Whether the pixel at `(col, row)` of a packed glyph is lit.
#[inline]
pub fn is_lit(mask: u32, col: u32, row: u32) -> bool {
    col < GLYPH_COLS && row < GLYPH_ROWS && (mask >> (row * 3 + (2 - col))) & 1 == 1
}
