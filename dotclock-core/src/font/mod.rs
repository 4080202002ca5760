//! Bitmap font renderer
//!
//! Text is laid out right-to-left in framebuffer coordinates: the first
//! character starts at `x` and every following glyph is placed further
//! towards column 0. The matrices are mounted mirrored, so on the physical
//! display the text reads left-to-right and a growing `x` scrolls it left.
//!
//! Characters without a glyph are skipped entirely: they take no columns
//! and add no spacing.

mod glyphs;

pub use glyphs::{DIGITS_LARGE, DIGITS_SMALL};

use glyphs::{CYRILLIC, CYRILLIC_SLOT, FIRST_CODE, FONT, GLYPH_STRIDE};

use crate::framebuffer::FrameBuffer;

/// Gap between two glyphs, and between two strings of a sequence
pub const SPACING: i32 = 1;

/// One character's columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    columns: &'static [u8],
}

impl Glyph {
    /// Width in pixels
    pub fn width(&self) -> i32 {
        self.columns.len() as i32
    }

    /// Column bytes, first column first; bit `y` is row `y`
    pub fn columns(&self) -> &'static [u8] {
        self.columns
    }
}

/// Look up the glyph for a character
///
/// Cyrillic letters (U+0410..U+044F) map onto their code page slots,
/// everything else is offset from the space character. Codes that land
/// outside the table, or on an unused slot, have no glyph.
pub fn glyph_for(ch: char) -> Option<Glyph> {
    let code = ch as u32;
    let slot = if CYRILLIC.contains(&code) {
        code - CYRILLIC.start + CYRILLIC_SLOT
    } else {
        code.checked_sub(FIRST_CODE)?
    };

    let entry = FONT.get(slot as usize)?;
    let width = (entry[0] as usize).min(GLYPH_STRIDE - 1);
    if width == 0 {
        return None;
    }

    Some(Glyph {
        columns: &entry[1..1 + width],
    })
}

/// Width of a string in pixels
pub fn str_width(text: &str) -> i32 {
    let mut width = 0;
    for glyph in text.chars().filter_map(glyph_for) {
        if width > 0 {
            width += SPACING;
        }
        width += glyph.width();
    }
    width
}

/// Width of a sequence of strings, each followed by one spacing column
pub fn seq_width(parts: &[&str]) -> i32 {
    parts.iter().map(|part| str_width(part) + SPACING).sum()
}

/// Draw a string and return its width
///
/// Each glyph column is written opaquely over all 8 rows starting at `y`.
pub fn draw_str(fb: &mut FrameBuffer, x: i32, y: i32, text: &str) -> i32 {
    let mut offset = 0;
    for glyph in text.chars().filter_map(glyph_for) {
        if offset > 0 {
            offset += SPACING;
        }
        for (col, &data) in glyph.columns().iter().enumerate() {
            let px = x - offset - col as i32;
            for row in 0..8 {
                fb.set(px, y + row, (data >> row) & 1 != 0);
            }
        }
        offset += glyph.width();
    }
    offset
}

/// Draw a sequence of strings and return the accumulated width
///
/// Matches [`seq_width`] for the same sequence.
pub fn draw_seq(fb: &mut FrameBuffer, x: i32, y: i32, parts: &[&str]) -> i32 {
    let mut x = x;
    let mut total = 0;
    for part in parts {
        let drawn = draw_str(fb, x, y, part) + SPACING;
        total += drawn;
        x -= drawn;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_lookup() {
        let a = glyph_for('A').unwrap();
        assert_eq!(a.width(), 5);
        assert_eq!(a.columns(), &[0x7E, 0x11, 0x11, 0x11, 0x7E]);
        assert_eq!(glyph_for('!').unwrap().width(), 1);
    }

    #[test]
    fn test_cyrillic_lookup() {
        // 'А' (U+0410) shares its shape with the Latin 'A'
        assert_eq!(glyph_for('А'), glyph_for('A'));
        assert!(glyph_for('я').is_some());
        assert!(glyph_for('Ж').is_some());
    }

    #[test]
    fn test_unmapped_characters() {
        assert_eq!(glyph_for('\n'), None);
        assert_eq!(glyph_for('\u{7F}'), None);
        // 'Ё' lies outside the mapped block and beyond the table
        assert_eq!(glyph_for('Ё'), None);
        assert_eq!(glyph_for('€'), None);
        assert_eq!(glyph_for('😀'), None);
    }

    #[test]
    fn test_str_width_spacing() {
        assert_eq!(str_width(""), 0);
        assert_eq!(str_width("A"), 5);
        assert_eq!(str_width("AA"), 11);
        // Unmapped characters neither add width nor trigger spacing
        assert_eq!(str_width("\nA\n\nA\n"), 11);
        assert_eq!(str_width("\n\n"), 0);
    }

    #[test]
    fn test_seq_width() {
        assert_eq!(seq_width(&[]), 0);
        assert_eq!(seq_width(&["A", "AA"]), 5 + 1 + 11 + 1);
        assert_eq!(seq_width(&["", ""]), 2);
    }

    #[test]
    fn test_draw_str_is_right_to_left() {
        let mut fb = FrameBuffer::new();
        let drawn = draw_str(&mut fb, 20, 0, "A!");
        assert_eq!(drawn, str_width("A!"));

        // First column of 'A' (0x7E, rows 1..7) sits at x = 20
        for row in 0..8 {
            assert_eq!(fb.get(20, row), (0x7E >> row) & 1 != 0);
        }
        // Last column of 'A' at x = 16, spacing at 15, '!' at 14
        assert!(fb.get(16, 1));
        assert!(!fb.get(15, 0) && !fb.get(15, 4));
        assert!(fb.get(14, 0));
        assert!(!fb.get(14, 5));
        assert!(fb.get(14, 6));
    }

    #[test]
    fn test_draw_str_overwrites_columns() {
        let mut fb = FrameBuffer::new();
        fb.set(10, 0, true);
        draw_str(&mut fb, 10, 0, "A");
        // Row 0 of the first 'A' column is off
        assert!(!fb.get(10, 0));
    }

    #[test]
    fn test_draw_seq_matches_width() {
        let parts = ["Пн", ", ", "12"];
        let mut fb = FrameBuffer::new();
        let drawn = draw_seq(&mut fb, 31, 0, &parts);
        assert_eq!(drawn, seq_width(&parts));
    }

    #[test]
    fn test_draw_seq_places_parts() {
        let mut single = FrameBuffer::new();
        draw_str(&mut single, 31, 0, "A");
        draw_str(&mut single, 31 - 6, 0, "B");

        let mut seq = FrameBuffer::new();
        draw_seq(&mut seq, 31, 0, &["A", "B"]);
        assert_eq!(seq, single);
    }

    #[test]
    fn test_draw_str_clips_silently() {
        let mut fb = FrameBuffer::new();
        let drawn = draw_str(&mut fb, -3, 0, "Hello");
        assert_eq!(drawn, str_width("Hello"));
        assert_eq!(fb.lit_count(), 0);
    }
}
