//! Configuration type definitions
//!
//! These types represent the clock configuration, loaded from the TOML file
//! embedded into the firmware.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_SUFFIX;
use crate::traits::MAX_INTENSITY;

/// Maximum banner suffix length in bytes
pub const MAX_SUFFIX_LEN: usize = 48;

/// Highest GPIO number on the RP2040
pub const MAX_GPIO: u8 = 29;

/// Allowed render/refresh cadence in milliseconds
pub const REFRESH_MS_RANGE: core::ops::RangeInclusive<u16> = 1..=100;

/// GPIO pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self { pin }
    }
}

/// Serial lines and brightness of the matrix chain
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixConfig {
    /// Clock line
    pub clk_pin: PinConfig,
    /// Data line
    pub data_pin: PinConfig,
    /// Chip-select (load) line
    pub cs_pin: PinConfig,
    /// Initial intensity, 0..=15
    pub intensity: u8,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            clk_pin: PinConfig::new(2),
            data_pin: PinConfig::new(3),
            cs_pin: PinConfig::new(5),
            intensity: 0,
        }
    }
}

/// Timekeeping and refresh settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockSettings {
    /// Local time offset from UTC in minutes
    pub utc_offset_min: i32,
    /// Render and refresh cadence in milliseconds
    pub refresh_ms: u16,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            utc_offset_min: 180,
            refresh_ms: 20,
        }
    }
}

/// Date banner text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BannerConfig {
    /// Text drawn after the year
    pub suffix: String<MAX_SUFFIX_LEN>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        let mut suffix = String::new();
        // The default suffix is well below the capacity
        let _ = suffix.push_str(DEFAULT_SUFFIX);
        Self { suffix }
    }
}

/// Complete clock configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    pub matrix: MatrixConfig,
    pub clock: ClockSettings,
    pub banner: BannerConfig,
}

impl ClockConfig {
    /// Create the built-in default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial intensity, clamped to the chip's range
    pub fn intensity(&self) -> u8 {
        self.matrix.intensity.min(MAX_INTENSITY)
    }
}
