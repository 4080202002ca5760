//! Remote display commands
//!
//! Commands arrive from the network collaborator and are applied to the
//! display controller between two render passes.

use heapless::String;

use crate::message::{truncate, MESSAGE_CAPACITY};
use crate::traits::MAX_INTENSITY;

/// Maximum length of the extra banner segment in bytes
pub const INFO_CAPACITY: usize = 64;

/// Commands accepted by the display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Synchronise the wall clock
    SetTime { unix_secs: u64 },
    /// Scroll a message over the clock for a while
    ShowMessage {
        text: String<MESSAGE_CAPACITY>,
        duration_ms: u32,
    },
    /// Brightness in percent, 0..=100
    SetBrightness { percent: u8 },
    /// Turn the matrices on or off
    EnableScreen { enabled: bool },
    /// Extra banner segment; empty removes it
    SetAdditionalInfo { text: String<INFO_CAPACITY> },
}

impl Command {
    /// Build a message command, truncating the text to fit
    pub fn show_message(text: &str, duration_ms: u32) -> Self {
        Command::ShowMessage {
            text: truncate(text),
            duration_ms,
        }
    }

    /// Build an extra info command, truncating the text to fit
    pub fn additional_info(text: &str) -> Self {
        Command::SetAdditionalInfo {
            text: truncate(text),
        }
    }
}

/// Chip intensity level for a brightness percentage
pub const fn intensity_for_percent(percent: u8) -> u8 {
    let percent = if percent > 100 { 100 } else { percent };
    let level = percent as u16 * MAX_INTENSITY as u16 / 100;
    level as u8
}
