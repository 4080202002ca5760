//! MAX7219/MAX7221 LED-matrix chain driver
//!
//! Bit-banged serial link over three output lines. Every transfer is
//! framed by chip-select: CS goes low, 16 bits per chip are shifted out
//! MSB first (opcode byte, then data byte) and the rising CS edge latches
//! them. Each chip passes its input through to the next, so the command
//! for the far end of the chain is shifted out first.

use dotclock_core::traits::{op, MatrixDriver};
use dotclock_core::{FrameBuffer, CHIP_COUNT, HEIGHT};
use embedded_hal::digital::OutputPin;

/// Line that failed while driving the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<E> {
    /// Clock line operation failed
    Clock(E),
    /// Data line operation failed
    Data(E),
    /// Chip-select line operation failed
    ChipSelect(E),
}

/// Scan limit covering all 8 rows
const SCAN_ALL_ROWS: u8 = 7;

/// Chain of `CHIP_COUNT` matrix driver chips
#[derive(Debug)]
pub struct Max7219Chain<CLK, DATA, CS> {
    clk: CLK,
    data: DATA,
    cs: CS,
}

impl<CLK, DATA, CS> Max7219Chain<CLK, DATA, CS>
where
    CLK: OutputPin,
    DATA: OutputPin<Error = CLK::Error>,
    CS: OutputPin<Error = CLK::Error>,
{
    /// Take ownership of the three lines
    ///
    /// Nothing is sent until [`MatrixDriver::configure`] is called.
    pub fn new(clk: CLK, data: DATA, cs: CS) -> Self {
        Self { clk, data, cs }
    }

    /// Releases the owned lines
    pub fn release(self) -> (CLK, DATA, CS) {
        (self.clk, self.data, self.cs)
    }

    fn select(&mut self) -> Result<(), DriverError<CLK::Error>> {
        self.cs.set_low().map_err(DriverError::ChipSelect)
    }

    fn latch(&mut self) -> Result<(), DriverError<CLK::Error>> {
        self.cs.set_high().map_err(DriverError::ChipSelect)
    }

    /// Shift one byte out, MSB first; data is valid on the rising clock edge
    fn shift_out(&mut self, byte: u8) -> Result<(), DriverError<CLK::Error>> {
        for bit in (0..8).rev() {
            if byte >> bit & 1 != 0 {
                self.data.set_high().map_err(DriverError::Data)?;
            } else {
                self.data.set_low().map_err(DriverError::Data)?;
            }
            self.clk.set_high().map_err(DriverError::Clock)?;
            self.clk.set_low().map_err(DriverError::Clock)?;
        }
        Ok(())
    }

    /// One chained transfer; `word(chip)` gives the (opcode, data) for a chip
    fn transfer(
        &mut self,
        word: impl Fn(usize) -> (u8, u8),
    ) -> Result<(), DriverError<CLK::Error>> {
        self.select()?;
        for chip in (0..CHIP_COUNT).rev() {
            let (opcode, data) = word(chip);
            self.shift_out(opcode)?;
            self.shift_out(data)?;
        }
        self.latch()
    }
}

impl<CLK, DATA, CS> MatrixDriver for Max7219Chain<CLK, DATA, CS>
where
    CLK: OutputPin,
    DATA: OutputPin<Error = CLK::Error>,
    CS: OutputPin<Error = CLK::Error>,
{
    type Error = DriverError<CLK::Error>;

    fn configure(&mut self) -> Result<(), Self::Error> {
        self.clk.set_low().map_err(DriverError::Clock)?;
        self.latch()?;

        self.broadcast(op::DISPLAY_TEST, 0)?;
        self.broadcast(op::SCAN_LIMIT, SCAN_ALL_ROWS)?;
        self.broadcast(op::DECODE_MODE, 0)?;
        self.broadcast(op::SHUTDOWN, 1)?;
        self.broadcast(op::INTENSITY, 0)
    }

    fn send_to_one(&mut self, chip: usize, opcode: u8, data: u8) -> Result<(), Self::Error> {
        self.transfer(|i| {
            if i == chip {
                (opcode, data)
            } else {
                (op::NOOP, 0)
            }
        })
    }

    fn broadcast(&mut self, opcode: u8, data: u8) -> Result<(), Self::Error> {
        self.transfer(|_| (opcode, data))
    }

    fn refresh_all(&mut self, fb: &FrameBuffer) -> Result<(), Self::Error> {
        for row in 0..HEIGHT as u8 {
            self.transfer(|chip| (op::digit(row), fb.row_byte(chip, row as usize)))?;
        }
        Ok(())
    }
}
