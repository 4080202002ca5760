//! Day count to calendar decomposition
//!
//! Turns a number of days since 1970-01-01 into weekday, day, month, year
//! and day of year. The year and day-of-year derivation adds up whole
//! 400/100/4-year cycles. It is a coarse approximation of the Gregorian
//! calendar, kept as-is because the displayed output depends on it.

/// Days in a 400-year Gregorian cycle
pub const CYCLE_400_YEARS: u32 = 365 * 400 + 97;

/// Days in a 100-year cycle
pub const CYCLE_100_YEARS: u32 = 365 * 100 + 24;

/// Days in a 4-year cycle
pub const CYCLE_4_YEARS: u32 = 365 * 4 + 3;

/// Offset added to the day count before folding it into the cycles
const CYCLE_ALIGNMENT_DAYS: u32 = 719_536;

/// First year of the epoch
pub const EPOCH_YEAR: u32 = 1970;

/// Month lengths in a leap year
pub static LEAP_YEAR_MONTHS: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month lengths in a regular year
pub static REGULAR_YEAR_MONTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Weekday names, Monday first
pub static WEEKDAYS: [&str; 7] = [
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
    "Воскресенье",
];

/// Month names in the genitive case, as used after a day number
pub static MONTHS: [&str; 12] = [
    "Января",
    "Февраля",
    "Марта",
    "Апреля",
    "Мая",
    "Июня",
    "Июля",
    "Августа",
    "Сентября",
    "Октября",
    "Ноября",
    "Декабря",
];

/// Calendar fields derived from a day count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rtc {
    /// 0 = Monday .. 6 = Sunday
    pub weekday: u8,
    /// 0-based remainder of the month walk; zero or negative, except for a
    /// folded day 366 in a regular year, where the walk runs out at 1
    pub day: i32,
    /// Month counter reached by the month walk (0-based, up to 12)
    pub month: u8,
    pub year: u32,
    pub leap_year: bool,
    /// 0-based day of year
    pub day_of_year: u16,
}

impl Rtc {
    /// Decompose a day count since the epoch (day 0 is a Thursday)
    pub fn from_days(days: u32) -> Self {
        let weekday = ((days as u64 + 3) % 7) as u8;

        let year = EPOCH_YEAR
            + days / CYCLE_400_YEARS * 400
            + days / CYCLE_100_YEARS * 100
            + days / CYCLE_4_YEARS * 4;
        let leap_year = is_leap_year(year);

        let aligned = (days as u64 + CYCLE_ALIGNMENT_DAYS as u64) % CYCLE_400_YEARS as u64;
        let mut day_of_year = (aligned as u32 % CYCLE_100_YEARS % CYCLE_4_YEARS) as i32;
        if day_of_year > 366 {
            day_of_year -= 366;
        }
        if day_of_year > 365 {
            day_of_year -= 365;
        }
        if day_of_year > 365 {
            day_of_year -= 365;
        }

        let lengths = month_lengths(leap_year);
        let mut month = 0usize;
        let mut day = day_of_year;
        while day > 0 && month < lengths.len() {
            day -= lengths[month] as i32;
            month += 1;
        }

        Self {
            weekday,
            day,
            month: month as u8,
            year,
            leap_year,
            day_of_year: day_of_year as u16,
        }
    }

    /// Weekday name
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAYS[self.weekday as usize % WEEKDAYS.len()]
    }

    /// Month name; a counter past December wraps to January
    pub fn month_name(&self) -> &'static str {
        MONTHS[self.month as usize % MONTHS.len()]
    }

    /// 1-based day number as displayed
    pub fn display_day(&self) -> i32 {
        self.day + 1
    }
}

/// Gregorian leap year rule
pub const fn is_leap_year(year: u32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

/// Month length table for a leap or regular year
pub fn month_lengths(leap_year: bool) -> &'static [u8; 12] {
    if leap_year {
        &LEAP_YEAR_MONTHS
    } else {
        &REGULAR_YEAR_MONTHS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_thursday() {
        let rtc = Rtc::from_days(0);
        assert_eq!(rtc.weekday, 3);
        assert_eq!(rtc.weekday_name(), "Четверг");
        assert_eq!(rtc.year, 1970);
        assert!(!rtc.leap_year);
    }

    #[test]
    fn test_weekday_cycles() {
        assert_eq!(Rtc::from_days(4).weekday, 0); // Monday 1970-01-05
        assert_eq!(Rtc::from_days(10).weekday, 6);
        assert_eq!(Rtc::from_days(7).weekday, 3);
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_year_advances_in_four_year_steps() {
        assert_eq!(Rtc::from_days(CYCLE_4_YEARS - 1).year, 1970);
        assert_eq!(Rtc::from_days(CYCLE_4_YEARS).year, 1974);
        // 13 whole 4-year cycles
        assert_eq!(Rtc::from_days(20_000).year, 2022);
    }

    #[test]
    fn test_day_of_year_folding() {
        // (0 + 719536) % 146097 % 36524 % 1463 = 705, then -366
        let rtc = Rtc::from_days(0);
        assert_eq!(rtc.day_of_year, 339);
        // 334 days through November, one more month overshoots
        assert_eq!(rtc.month, 12);
        assert_eq!(rtc.day, 339 - 334 - 31);
        assert_eq!(rtc.month_name(), "Января");
    }

    #[test]
    fn test_month_walk_on_first_day() {
        // A day count whose folded day of year is zero stays in month 0
        let days = (0..CYCLE_4_YEARS)
            .find(|&d| Rtc::from_days(d).day_of_year == 0)
            .unwrap();
        let rtc = Rtc::from_days(days);
        assert_eq!(rtc.month, 0);
        assert_eq!(rtc.day, 0);
        assert_eq!(rtc.display_day(), 1);
        assert_eq!(rtc.month_name(), "Января");
    }

    #[test]
    fn test_month_walk_overshoots() {
        let days = (0..CYCLE_4_YEARS)
            .find(|&d| Rtc::from_days(d).day_of_year == 1)
            .unwrap();
        let rtc = Rtc::from_days(days);
        assert_eq!(rtc.month, 1);
        assert_eq!(rtc.day, 1 - 31);
    }

    #[test]
    fn test_day_366_in_regular_year() {
        // (757 + 719536) % 146097 % 36524 % 1463 = 1462, then -366 -365 -365
        let rtc = Rtc::from_days(757);
        assert_eq!(rtc.day_of_year, 366);
        assert!(!rtc.leap_year);
        // 365 days fit in twelve months, the walk stops with one left over
        assert_eq!(rtc.month, 12);
        assert_eq!(rtc.day, 1);
        assert_eq!(rtc.display_day(), 2);
        assert_eq!(rtc.month_name(), "Января");
    }

    #[test]
    fn test_fields_stay_in_range() {
        for days in (0..200_000).step_by(7) {
            let rtc = Rtc::from_days(days);
            assert!(rtc.weekday < 7);
            assert!(rtc.month <= 12);
            assert!(rtc.day_of_year <= 366);
            assert!(rtc.day > -31);
            if rtc.day > 0 {
                assert_eq!((rtc.day, rtc.month, rtc.day_of_year), (1, 12, 366));
            }
        }
    }
}
