//! LED-matrix chain driver trait
//!
//! This trait abstracts over the serial link to a daisy chain of 8x8
//! matrix driver chips (MAX7219, MAX7221 and compatibles).

use crate::framebuffer::FrameBuffer;

/// Register opcodes of the matrix driver chips
pub mod op {
    /// No operation, passes data through to the next chip
    pub const NOOP: u8 = 0;
    /// Row register 0; rows 1..7 follow consecutively
    pub const DIGIT0: u8 = 1;
    pub const DECODE_MODE: u8 = 9;
    pub const INTENSITY: u8 = 10;
    pub const SCAN_LIMIT: u8 = 11;
    /// 0 = shutdown, 1 = normal operation
    pub const SHUTDOWN: u8 = 12;
    pub const DISPLAY_TEST: u8 = 15;

    /// Row register for `row` (0..8)
    pub const fn digit(row: u8) -> u8 {
        DIGIT0 + row
    }
}

/// Highest intensity level
pub const MAX_INTENSITY: u8 = 15;

/// Trait for a chain of matrix driver chips
///
/// Every operation is one or more chained transfers: 16 bits per chip,
/// framed by chip-select. The protocol has no acknowledgement, so errors
/// only come from driving the output lines.
pub trait MatrixDriver {
    /// Error raised by the output lines
    type Error;

    /// Bring the chain into raw bitmap mode, powered on, minimum intensity
    fn configure(&mut self) -> Result<(), Self::Error>;

    /// Send `(opcode, data)` to a single chip; every other chip gets a no-op
    fn send_to_one(&mut self, chip: usize, opcode: u8, data: u8) -> Result<(), Self::Error>;

    /// Send the same `(opcode, data)` to every chip
    fn broadcast(&mut self, opcode: u8, data: u8) -> Result<(), Self::Error>;

    /// Mirror the whole framebuffer onto the chain, one transfer per row
    fn refresh_all(&mut self, fb: &FrameBuffer) -> Result<(), Self::Error>;

    /// Set the brightness of the whole chain, clamped to 0..=15
    fn set_intensity(&mut self, level: u8) -> Result<(), Self::Error> {
        self.broadcast(op::INTENSITY, level.min(MAX_INTENSITY))
    }

    /// Switch the whole chain between normal operation and shutdown
    fn set_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
        self.broadcast(op::SHUTDOWN, enabled as u8)
    }
}
