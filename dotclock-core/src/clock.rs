//! Clock renderer
//!
//! Every 30 seconds the display shows a scrolling date banner for 10
//! seconds, then a digital clock face for 20 seconds. The face shows hours
//! and minutes in large digits and seconds in small digits that slide
//! upward during the last quarter of every second.
//!
//! The renderer keeps no state of its own: the same inputs always produce
//! the same framebuffer.

use core::fmt::Write;

use heapless::String;

use crate::calendar::Rtc;
use crate::font::{self, DIGITS_LARGE, DIGITS_SMALL};
use crate::framebuffer::{FrameBuffer, WIDTH};
use crate::shape::Shape;

/// Milliseconds in one day
pub const MS_PER_DAY: u32 = 86_400_000;

/// Length of one banner + face cycle in seconds
pub const CYCLE_S: u32 = 30;

/// Seconds of each cycle spent on the banner
pub const BANNER_S: u32 = 10;

/// Milliseconds per banner scroll step (one pixel)
pub const SCROLL_STEP_MS: u64 = 50;

/// Duration of the seconds slide at the end of each second
pub const SLIDE_MS: u32 = 250;

/// Vertical pitch of the stacked small digits
pub const SMALL_DIGIT_HEIGHT: i32 = 6;

/// Default text following the year in the banner
pub const DEFAULT_SUFFIX: &str = " года ...  ";

const HOUR_SLOTS: [i32; 2] = [WIDTH - 1 - 6, WIDTH - 1 - 12];
const MINUTE_SLOTS: [i32; 2] = [18 - 6, 18 - 12];
/// Seconds tens and units
const SECOND_SLOTS: [i32; 2] = [-1, -5];

/// Value 0..=99 as a zero-padded pair of digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TwoDigits([u8; 2]);

impl TwoDigits {
    /// Values above 99 keep their last two digits
    pub const fn new(value: u32) -> Self {
        let value = value % 100;
        Self([b'0' + (value / 10) as u8, b'0' + (value % 10) as u8])
    }

    /// Numeric value of the digit at `index` (0 = tens)
    pub const fn digit(&self, index: usize) -> usize {
        (self.0[index] - b'0') as usize
    }

    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII digits
        core::str::from_utf8(&self.0).unwrap_or("00")
    }
}

/// What a render pass drew
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Scrolling date banner
    Banner {
        /// Horizontal offset the banner was drawn at
        offset: i32,
        /// Total banner width, the scroll period in pixels
        width: i32,
    },
    /// Digital clock face
    Face {
        hours: u8,
        minutes: u8,
        seconds: u8,
        /// Upward slide of the seconds digits, 0..=6
        slide: i32,
    },
}

impl Mode {
    pub fn is_banner(&self) -> bool {
        matches!(self, Mode::Banner { .. })
    }
}

/// Check whether a time of day falls into the banner part of the cycle
pub const fn is_banner_phase(ms_of_period: u32) -> bool {
    ms_of_period / 1000 % CYCLE_S < BANNER_S
}

/// Upward slide of the seconds digits at a time of day
pub const fn slide_offset(ms_of_period: u32) -> i32 {
    let ms = ms_of_period % 1000;
    if ms >= 1000 - SLIDE_MS {
        SMALL_DIGIT_HEIGHT - ((1000 - ms) as i32 * SMALL_DIGIT_HEIGHT / SLIDE_MS as i32)
    } else {
        0
    }
}

/// Clock renderer with its banner texts
#[derive(Debug, Clone, Copy)]
pub struct ClockRenderer<'a> {
    suffix: &'a str,
    info: &'a str,
}

impl Default for ClockRenderer<'_> {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIX)
    }
}

impl<'a> ClockRenderer<'a> {
    /// Create a renderer whose banner ends with `suffix`
    pub const fn new(suffix: &'a str) -> Self {
        Self { suffix, info: "" }
    }

    /// Append an extra segment after the banner suffix (empty = none)
    pub const fn with_info(mut self, info: &'a str) -> Self {
        self.info = info;
        self
    }

    /// Render one frame
    ///
    /// - `days`: days since 1970-01-01
    /// - `ms_of_period`: milliseconds since midnight
    /// - `elapsed_ms`: monotonic counter driving the banner scroll
    pub fn render(&self, fb: &mut FrameBuffer, days: u32, ms_of_period: u32, elapsed_ms: u64) -> Mode {
        if is_banner_phase(ms_of_period) {
            self.render_banner(fb, days, elapsed_ms)
        } else {
            render_face(fb, ms_of_period)
        }
    }

    /// Draw the date banner scrolled according to `elapsed_ms`
    pub fn render_banner(&self, fb: &mut FrameBuffer, days: u32, elapsed_ms: u64) -> Mode {
        let rtc = Rtc::from_days(days);

        let mut day: String<12> = String::new();
        let _ = write!(day, "{}", rtc.display_day());
        let mut year: String<12> = String::new();
        let _ = write!(year, "{}", rtc.year);

        let parts = [
            "  ",
            rtc.weekday_name(),
            ", ",
            day.as_str(),
            " ",
            rtc.month_name(),
            " ",
            year.as_str(),
            self.suffix,
            self.info,
        ];
        let parts = if self.info.is_empty() {
            &parts[..parts.len() - 1]
        } else {
            &parts[..]
        };

        let width = font::seq_width(parts);
        let offset = (elapsed_ms / SCROLL_STEP_MS % width.max(1) as u64) as i32;

        fb.clear();
        font::draw_seq(fb, offset, 0, parts);

        Mode::Banner { offset, width }
    }
}

/// Draw the clock face for a time of day
pub fn render_face(fb: &mut FrameBuffer, ms_of_period: u32) -> Mode {
    let seconds_of_day = ms_of_period / 1000 % 86_400;
    let (h, m, s) = (seconds_of_day / 3600, seconds_of_day % 3600 / 60, seconds_of_day % 60);
    let hours = TwoDigits::new(h);
    let minutes = TwoDigits::new(m);
    let seconds = [
        TwoDigits::new(s),
        TwoDigits::new((s + 1) % 60),
        TwoDigits::new((s + 2) % 60),
    ];

    fb.clear();

    for (n, &x) in HOUR_SLOTS.iter().enumerate() {
        fb.draw_shape(x, 0, &Shape::bitmap(DIGITS_LARGE[hours.digit(n)]), true);
    }
    for (n, &x) in MINUTE_SLOTS.iter().enumerate() {
        fb.draw_shape(x, 0, &Shape::bitmap(DIGITS_LARGE[minutes.digit(n)]), true);
    }

    // Current, next and next-next second stacked upward; inverted on the
    // freshly cleared buffer, where the stacked digits never overlap
    let y = slide_offset(ms_of_period);
    for (n, &x) in SECOND_SLOTS.iter().enumerate() {
        for (k, value) in seconds.iter().enumerate() {
            let shape = Shape::bitmap(DIGITS_SMALL[value.digit(n)]);
            fb.invert_shape(x, y - SMALL_DIGIT_HEIGHT * k as i32, &shape);
        }
    }

    Mode::Face {
        hours: h as u8,
        minutes: m as u8,
        seconds: s as u8,
        slide: y,
    }
}
