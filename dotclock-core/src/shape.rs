//! Shapes painted into the framebuffer
//!
//! A shape is an immutable description of a pixel set relative to an
//! origin. The framebuffer translates the pixels and applies them, so its
//! drawing routines never need to know which variant they are handling.

/// Rows of an 8x8 bitmap. Row `r`, bit `i` set means pixel `(i, r)`.
pub type BitmapRows = [u8; 8];

/// Closed set of drawable shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shape {
    /// Every pixel of the `w` x `h` box whose top-left corner is `(x, y)`
    Rect { x: i32, y: i32, w: i32, h: i32 },
    /// 8 rows of 8 bits
    Bitmap(BitmapRows),
}

impl Shape {
    /// Create a filled rectangle
    pub const fn rect(x: i32, y: i32, w: i32, h: i32) -> Self {
        Shape::Rect { x, y, w, h }
    }

    /// Create a bitmap shape from 8 row bytes
    pub const fn bitmap(rows: BitmapRows) -> Self {
        Shape::Bitmap(rows)
    }

    /// Iterate over the relative pixels this shape produces
    pub fn pixels(&self) -> Pixels {
        Pixels {
            shape: *self,
            index: 0,
        }
    }
}

/// Iterator over the relative `(x, y)` pixels of a [`Shape`]
#[derive(Debug, Clone)]
pub struct Pixels {
    shape: Shape,
    index: u64,
}

impl Iterator for Pixels {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        match self.shape {
            Shape::Rect { x, y, w, h } => {
                if w <= 0 || h <= 0 {
                    return None;
                }
                // Column-major: all rows of column 0, then column 1, ...
                let total = w as u64 * h as u64;
                if self.index >= total {
                    return None;
                }
                let i = self.index;
                self.index += 1;
                let col = (i / h as u64) as i32;
                let row = (i % h as u64) as i32;
                Some((x + col, y + row))
            }
            Shape::Bitmap(rows) => {
                while self.index < 64 {
                    let i = self.index as usize;
                    self.index += 1;
                    let (row, bit) = (i / 8, i % 8);
                    if (rows[row] >> bit) & 1 != 0 {
                        return Some((bit as i32, row as i32));
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_whole_box() {
        let shape = Shape::rect(2, 1, 3, 2);
        let mut count = 0;
        for (x, y) in shape.pixels() {
            assert!((2..5).contains(&x));
            assert!((1..3).contains(&y));
            count += 1;
        }
        assert_eq!(count, 6);
    }

    #[test]
    fn test_empty_rect_produces_nothing() {
        assert_eq!(Shape::rect(0, 0, 0, 5).pixels().count(), 0);
        assert_eq!(Shape::rect(0, 0, 4, -1).pixels().count(), 0);
    }

    #[test]
    fn test_bitmap_bit_order() {
        let mut rows = [0u8; 8];
        rows[0] = 0b0000_0001;
        rows[3] = 0b1000_0000;
        let mut pixels = Shape::bitmap(rows).pixels();
        assert_eq!(pixels.next(), Some((0, 0)));
        assert_eq!(pixels.next(), Some((7, 3)));
        assert_eq!(pixels.next(), None);
    }

    #[test]
    fn test_full_bitmap() {
        assert_eq!(Shape::bitmap([0xFF; 8]).pixels().count(), 64);
    }
}
