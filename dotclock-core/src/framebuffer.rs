//! Framebuffer for the chained LED matrices
//!
//! The buffer is a 32x8 grid of on/off pixels grouped into one 8x8 block
//! per matrix chip. Storage is chip-major so the driver can stream one
//! byte per chip per row without any reshuffling.

use crate::shape::Shape;

/// Number of chained 8x8 matrix chips
pub const CHIP_COUNT: usize = 4;

/// Framebuffer width in pixels
pub const WIDTH: i32 = (CHIP_COUNT * 8) as i32;

/// Framebuffer height in pixels
pub const HEIGHT: i32 = 8;

/// Total framebuffer size in bytes
pub const BUFFER_SIZE: usize = CHIP_COUNT * 8;

/// 1bpp framebuffer
///
/// Byte `(x / 8) * 8 + y` holds, in bit `x % 8`, the pixel at column `x`
/// and row `y`. Coordinates outside the grid are never stored: reads report
/// "off" and writes are dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a new, all-off framebuffer
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BUFFER_SIZE],
        }
    }

    /// Check if a coordinate lies inside the grid
    pub const fn fits(x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < WIDTH && y < HEIGHT
    }

    #[inline]
    const fn index(x: i32, y: i32) -> usize {
        (x / 8 * 8 + y) as usize
    }

    /// Read a pixel; outside the grid is always off
    pub fn get(&self, x: i32, y: i32) -> bool {
        if !Self::fits(x, y) {
            return false;
        }
        (self.bytes[Self::index(x, y)] >> (x % 8)) & 1 != 0
    }

    /// Write a pixel; outside the grid the write is lost
    pub fn set(&mut self, x: i32, y: i32, on: bool) {
        if !Self::fits(x, y) {
            return;
        }
        let mask = 1u8 << (x % 8);
        let byte = &mut self.bytes[Self::index(x, y)];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Toggle a pixel
    pub fn invert(&mut self, x: i32, y: i32) {
        self.set(x, y, !self.get(x, y));
    }

    /// Paint every pixel of `shape`, translated by `(origin_x, origin_y)`
    pub fn draw_shape(&mut self, origin_x: i32, origin_y: i32, shape: &Shape, on: bool) {
        for (x, y) in shape.pixels() {
            self.set(origin_x + x, origin_y + y, on);
        }
    }

    /// Toggle every pixel of `shape`, translated by `(origin_x, origin_y)`
    pub fn invert_shape(&mut self, origin_x: i32, origin_y: i32, shape: &Shape) {
        for (x, y) in shape.pixels() {
            self.invert(origin_x + x, origin_y + y);
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Raw row byte of one chip, as shifted out to the hardware
    ///
    /// Returns 0 for a chip or row outside the chain.
    pub fn row_byte(&self, chip: usize, row: usize) -> u8 {
        if chip >= CHIP_COUNT || row >= HEIGHT as usize {
            return 0;
        }
        self.bytes[chip * 8 + row]
    }

    /// Returns the underlying framebuffer bytes
    pub fn bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Number of pixels currently on
    pub fn lit_count(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "FrameBuffer")?;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                f.write_str(if self.get(x, y) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "FrameBuffer[{=[u8]:x}]", &self.bytes[..]);
    }
}
