//! Property tests for the rendering core

use dotclock_core::calendar::Rtc;
use dotclock_core::clock::{is_banner_phase, slide_offset, ClockRenderer, Mode};
use dotclock_core::font::{draw_str, seq_width, str_width};
use dotclock_core::{FrameBuffer, Shape, HEIGHT, WIDTH};
use proptest::prelude::*;

fn in_range() -> impl Strategy<Value = (i32, i32)> {
    (0..WIDTH, 0..HEIGHT)
}

fn out_of_range() -> impl Strategy<Value = (i32, i32)> {
    prop_oneof![
        (-1000..0, -1000..1000),
        (WIDTH..1000, -1000..1000),
        (-1000..1000, -1000..0),
        (-1000..1000, HEIGHT..1000),
    ]
}

/// Some initial content so writes are checked against a non-blank buffer
fn seeded(bytes: &[u8]) -> FrameBuffer {
    let mut fb = FrameBuffer::new();
    for (i, b) in bytes.iter().enumerate() {
        for bit in 0..8 {
            if b >> bit & 1 != 0 {
                fb.set((i as i32 / 8) * 8 + bit, i as i32 % 8, true);
            }
        }
    }
    fb
}

/// Strings of printable ASCII and Cyrillic letters, all of which have glyphs
fn mapped_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9А-Яа-я.,!?]{1,12}"
}

proptest! {
    #[test]
    fn set_then_get((x, y) in in_range(), value: bool, seed in prop::collection::vec(any::<u8>(), 32)) {
        let mut fb = seeded(&seed);
        fb.set(x, y, value);
        prop_assert_eq!(fb.get(x, y), value);
    }

    #[test]
    fn out_of_range_access_is_ignored((x, y) in out_of_range(), value: bool, seed in prop::collection::vec(any::<u8>(), 32)) {
        let mut fb = seeded(&seed);
        let before = fb.clone();
        prop_assert!(!fb.get(x, y));
        fb.set(x, y, value);
        prop_assert_eq!(fb, before);
    }

    #[test]
    fn invert_toggles_only_target((x, y) in in_range(), seed in prop::collection::vec(any::<u8>(), 32)) {
        let mut fb = seeded(&seed);
        let before = fb.clone();
        fb.invert(x, y);
        for px in 0..WIDTH {
            for py in 0..HEIGHT {
                if (px, py) == (x, y) {
                    prop_assert_ne!(fb.get(px, py), before.get(px, py));
                } else {
                    prop_assert_eq!(fb.get(px, py), before.get(px, py));
                }
            }
        }
    }

    #[test]
    fn storage_layout((x, y) in in_range()) {
        let mut fb = FrameBuffer::new();
        fb.set(x, y, true);
        let chip = (x / 8) as usize;
        prop_assert_eq!(fb.row_byte(chip, y as usize), 1u8 << (x % 8));
        prop_assert_eq!(fb.lit_count(), 1);
    }

    #[test]
    fn rect_stays_inside_its_box(x in -10i32..40, y in -10i32..20, w in 0i32..12, h in 0i32..12) {
        let shape = Shape::rect(x, y, w, h);
        let mut count = 0;
        for (px, py) in shape.pixels() {
            prop_assert!(px >= x && px < x + w && py >= y && py < y + h);
            count += 1;
        }
        prop_assert_eq!(count, w * h);
    }

    #[test]
    fn seq_width_spaces_after_every_part(a in mapped_text(), b in mapped_text()) {
        prop_assert_eq!(seq_width(&[&a, &b]), str_width(&a) + str_width(&b) + 2);
        prop_assert_eq!(str_width(&format!("{a}{b}")), str_width(&a) + str_width(&b) + 1);
    }

    #[test]
    fn draw_str_is_deterministic(text in "\\PC{0,16}", x in -40i32..80, y in -8i32..8) {
        let mut first = FrameBuffer::new();
        let w1 = draw_str(&mut first, x, y, &text);
        let mut second = FrameBuffer::new();
        let w2 = draw_str(&mut second, x, y, &text);
        prop_assert_eq!(w1, w2);
        prop_assert_eq!(w1, str_width(&text));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn calendar_fields_in_range(days in 0u32..2_000_000) {
        let rtc = Rtc::from_days(days);
        prop_assert_eq!(rtc.weekday as u32, (days + 3) % 7);
        prop_assert!(rtc.month <= 12);
        prop_assert!(rtc.day_of_year <= 366);
        if rtc.day > 0 {
            // Only a folded day 366 in a regular year outruns the month walk
            prop_assert_eq!((rtc.day, rtc.month, rtc.day_of_year), (1, 12, 366));
            prop_assert!(!rtc.leap_year);
        }
        prop_assert!(rtc.year >= 1970);
        prop_assert!(!rtc.weekday_name().is_empty());
        prop_assert!(!rtc.month_name().is_empty());
    }

    #[test]
    fn render_is_deterministic(days in 0u32..40_000, ms in 0u32..86_400_000, elapsed in 0u64..10_000_000, seed in prop::collection::vec(any::<u8>(), 32)) {
        let renderer = ClockRenderer::default();
        let mut clean = FrameBuffer::new();
        let mut dirty = seeded(&seed);
        let a = renderer.render(&mut clean, days, ms, elapsed);
        let b = renderer.render(&mut dirty, days, ms, elapsed);
        prop_assert_eq!(a, b);
        prop_assert_eq!(clean, dirty);
        prop_assert_eq!(a.is_banner(), is_banner_phase(ms));
    }

    #[test]
    fn banner_offset_wraps(days in 0u32..40_000, elapsed in 0u64..10_000_000) {
        let mut fb = FrameBuffer::new();
        match ClockRenderer::default().render_banner(&mut fb, days, elapsed) {
            Mode::Banner { offset, width } => {
                prop_assert!(width > 0);
                prop_assert_eq!(offset as u64, elapsed / 50 % width as u64);
            }
            other => prop_assert!(false, "unexpected mode {:?}", other),
        }
    }

    #[test]
    fn slide_stays_within_digit(ms in 0u32..86_400_000) {
        let y = slide_offset(ms);
        prop_assert!((0..=6).contains(&y));
        if ms % 1000 < 750 {
            prop_assert_eq!(y, 0);
        }
    }
}
