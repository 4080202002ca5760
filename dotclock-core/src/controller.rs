//! Display controller
//!
//! Owns the framebuffer and everything that decides what goes into it:
//! the time base, the active message and the banner texts. Commands
//! change that state; hardware-facing changes (intensity, power) are held
//! as pending until the next hardware sync pushes them to the chain.

use heapless::String;

use crate::clock::{ClockRenderer, Mode};
use crate::command::{intensity_for_percent, Command, INFO_CAPACITY};
use crate::config::{ClockConfig, MAX_SUFFIX_LEN};
use crate::framebuffer::FrameBuffer;
use crate::message::Message;
use crate::time::TimeBase;
use crate::traits::MatrixDriver;

/// What a render pass put into the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// A remote message, drawn at `offset`
    Message { offset: i32 },
    /// The clock renderer output
    Clock(Mode),
}

impl Frame {
    /// Coarse kind of frame, for detecting changes worth logging
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Message { .. } => FrameKind::Message,
            Frame::Clock(Mode::Banner { .. }) => FrameKind::Banner,
            Frame::Clock(Mode::Face { .. }) => FrameKind::Face,
        }
    }
}

/// Frame kind without the per-frame details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameKind {
    Message,
    Banner,
    Face,
}

/// Hardware settings not yet pushed to the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Pending {
    intensity: bool,
    power: bool,
}

/// Display controller
pub struct DisplayController {
    fb: FrameBuffer,
    time: TimeBase,
    message: Option<Message>,
    suffix: String<MAX_SUFFIX_LEN>,
    info: String<INFO_CAPACITY>,
    intensity: u8,
    enabled: bool,
    pending: Pending,
}

impl DisplayController {
    /// Create a controller from the clock configuration
    ///
    /// The configured intensity is pending so the first sync applies it on
    /// top of the chain's power-on configuration.
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            fb: FrameBuffer::new(),
            time: TimeBase::new(config.clock.utc_offset_min),
            message: None,
            suffix: config.banner.suffix.clone(),
            info: String::new(),
            intensity: config.intensity(),
            enabled: true,
            pending: Pending {
                intensity: true,
                power: false,
            },
        }
    }

    /// Apply a remote command received at monotonic `now_ms`
    pub fn apply(&mut self, command: Command, now_ms: u64) {
        match command {
            Command::SetTime { unix_secs } => self.time.set_unix_time(unix_secs, now_ms),
            Command::ShowMessage { text, duration_ms } => {
                self.message = Some(Message::new(&text, duration_ms, now_ms));
            }
            Command::SetBrightness { percent } => {
                self.intensity = intensity_for_percent(percent);
                self.pending.intensity = true;
            }
            Command::EnableScreen { enabled } => {
                self.enabled = enabled;
                self.pending.power = true;
            }
            Command::SetAdditionalInfo { text } => self.info = text,
        }
    }

    /// Render the frame for monotonic `now_ms`
    ///
    /// An active message takes precedence over the clock. An expired
    /// message is dropped here.
    pub fn render(&mut self, now_ms: u64) -> Frame {
        if let Some(message) = &self.message {
            if message.is_active(now_ms) {
                let offset = message.render(&mut self.fb, now_ms);
                return Frame::Message { offset };
            }
            self.message = None;
        }

        let local = self.time.local(now_ms);
        let renderer = ClockRenderer::new(&self.suffix).with_info(&self.info);
        Frame::Clock(renderer.render(&mut self.fb, local.days, local.ms_of_day, now_ms))
    }

    /// Push pending intensity and power changes, then the framebuffer
    ///
    /// A change stays pending if pushing it fails.
    pub fn sync_hardware<D: MatrixDriver>(&mut self, driver: &mut D) -> Result<(), D::Error> {
        if self.pending.power {
            driver.set_enabled(self.enabled)?;
            self.pending.power = false;
        }
        if self.pending.intensity {
            driver.set_intensity(self.intensity)?;
            self.pending.intensity = false;
        }
        driver.refresh_all(&self.fb)
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn time_base(&self) -> &TimeBase {
        &self.time
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Current intensity level, 0..=15
    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn additional_info(&self) -> &str {
        &self.info
    }
}
