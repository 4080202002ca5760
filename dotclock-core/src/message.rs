//! Timed text overlay
//!
//! A message scrolls across the display the same way the date banner
//! does and hides the clock until its duration runs out.

use heapless::String;

use crate::clock::SCROLL_STEP_MS;
use crate::font;
use crate::framebuffer::FrameBuffer;

/// Maximum message length in bytes
pub const MESSAGE_CAPACITY: usize = 128;

/// Blank lead-in so the text enters from the edge
const LEAD_IN: &str = "  ";

/// Copy `text` into a bounded string, cutting on a character boundary
pub fn truncate<const N: usize>(text: &str) -> String<N> {
    let mut end = text.len().min(N);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::new();
    // Fits by construction
    let _ = out.push_str(&text[..end]);
    out
}

/// Message shown for a limited time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String<MESSAGE_CAPACITY>,
    started_ms: u64,
    duration_ms: u32,
}

impl Message {
    /// Create a message that starts at monotonic `now_ms`
    pub fn new(text: &str, duration_ms: u32, now_ms: u64) -> Self {
        Self {
            text: truncate(text),
            started_ms: now_ms,
            duration_ms,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Whether the message is still visible at `now_ms`
    pub fn is_active(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_ms) < self.duration_ms as u64
    }

    /// Scroll period in pixels
    pub fn width(&self) -> i32 {
        font::seq_width(&[LEAD_IN, self.text.as_str()])
    }

    /// Draw the message scrolled to `now_ms` and return its offset
    pub fn render(&self, fb: &mut FrameBuffer, now_ms: u64) -> i32 {
        let elapsed = now_ms.saturating_sub(self.started_ms);
        let offset = (elapsed / SCROLL_STEP_MS % self.width().max(1) as u64) as i32;
        fb.clear();
        font::draw_seq(fb, offset, 0, &[LEAD_IN, self.text.as_str()]);
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_on_char_boundary() {
        let s: String<5> = truncate("abcdefgh");
        assert_eq!(s.as_str(), "abcde");

        // Cyrillic letters take two bytes; the third one would be split
        let s: String<5> = truncate("Привет");
        assert_eq!(s.as_str(), "Пр");

        let s: String<5> = truncate("ok");
        assert_eq!(s.as_str(), "ok");
    }

    #[test]
    fn test_long_message_truncated() {
        let mut long: String<256> = String::new();
        for _ in 0..100 {
            long.push('ж').unwrap();
        }
        let msg = Message::new(&long, 1000, 0);
        assert_eq!(msg.text().len(), MESSAGE_CAPACITY);
        assert_eq!(msg.text().chars().count(), 64);
    }

    #[test]
    fn test_expiry() {
        let msg = Message::new("Hi", 1000, 500);
        assert!(msg.is_active(500));
        assert!(msg.is_active(1499));
        assert!(!msg.is_active(1500));
    }

    #[test]
    fn test_zero_duration_never_active() {
        let msg = Message::new("Hi", 0, 0);
        assert!(!msg.is_active(0));
    }

    #[test]
    fn test_scrolls_from_start_time() {
        let msg = Message::new("Done...", 10_000, 2_000);
        let mut fb = FrameBuffer::new();
        assert_eq!(msg.render(&mut fb, 2_000), 0);
        assert_eq!(msg.render(&mut fb, 2_000 + 50 * 9), 9);

        let mut expected = FrameBuffer::new();
        font::draw_seq(&mut expected, 9, 0, &["  ", "Done..."]);
        assert_eq!(fb, expected);
    }

    #[test]
    fn test_scroll_wraps() {
        let msg = Message::new("Updating...", 10_000, 0);
        let mut fb = FrameBuffer::new();
        let width = msg.width() as u64;
        assert_eq!(msg.render(&mut fb, 50 * (width + 2)), 2);
    }
}
