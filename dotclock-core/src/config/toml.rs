//! Simple TOML parser for the clock configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the clock configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Multi-line strings
//! - Escape sequences inside strings
//! - Arrays and inline tables
//!
//! Unknown keys inside a known section are ignored so newer configuration
//! files keep loading on older firmware.

use heapless::String;

use super::types::{ClockConfig, PinConfig, MAX_GPIO, REFRESH_MS_RANGE};
use crate::traits::MAX_INTENSITY;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
    /// Value outside its allowed range
    OutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Matrix,
    Clock,
    Banner,
}

/// Parse TOML configuration into ClockConfig
///
/// Keys that are not given keep their default values.
pub fn parse_config(input: &str) -> Result<ClockConfig, ParseError> {
    let mut config = ClockConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = line
                .strip_suffix(']')
                .ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(&header[1..])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "matrix" => Ok(Section::Matrix),
        "clock" => Ok(Section::Clock),
        "banner" => Ok(Section::Banner),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut ClockConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Matrix => match key {
            "clk_pin" => config.matrix.clk_pin = parse_pin(value)?,
            "data_pin" => config.matrix.data_pin = parse_pin(value)?,
            "cs_pin" => config.matrix.cs_pin = parse_pin(value)?,
            "intensity" => {
                let level: u8 = parse_int(value)?;
                if level > MAX_INTENSITY {
                    return Err(ParseError::OutOfRange);
                }
                config.matrix.intensity = level;
            }
            _ => {}
        },
        Section::Clock => match key {
            "utc_offset_min" => {
                let offset: i32 = parse_int(value)?;
                // UTC-12:00 .. UTC+14:00
                if !(-12 * 60..=14 * 60).contains(&offset) {
                    return Err(ParseError::OutOfRange);
                }
                config.clock.utc_offset_min = offset;
            }
            "refresh_ms" => {
                let ms: u16 = parse_int(value)?;
                if !REFRESH_MS_RANGE.contains(&ms) {
                    return Err(ParseError::OutOfRange);
                }
                config.clock.refresh_ms = ms;
            }
            _ => {}
        },
        Section::Banner => {
            if key == "suffix" {
                let text = parse_quoted(value)?;
                config.banner.suffix =
                    String::try_from(text).map_err(|_| ParseError::OutOfRange)?;
            }
        }
        // Top-level keys carry nothing yet
        Section::Root => {}
    }
    Ok(())
}

/// Split a `key = value` line, dropping a trailing comment
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.rfind('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value that must be quoted
///
/// Quoting matters for the banner suffix, whose leading and trailing
/// spaces are significant.
fn parse_quoted(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Parse a string value (removes quotes if present)
fn parse_string(value: &str) -> &str {
    parse_quoted(value).unwrap_or(value)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a pin string like "gpio11"
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let s = parse_string(value);

    let number = s.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    let pin: u8 = number.parse().map_err(|_| ParseError::InvalidPin)?;
    if pin > MAX_GPIO {
        return Err(ParseError::InvalidPin);
    }

    Ok(PinConfig::new(pin))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Dot-matrix clock

[matrix]
clk_pin = "gpio10"
data_pin = "gpio11"   # MOSI
cs_pin = gpio9
intensity = 4

[clock]
utc_offset_min = -300
refresh_ms = 25

[banner]
suffix = " year # "
"#;

    #[test]
    fn test_parse_pin() {
        assert_eq!(parse_pin("gpio11").unwrap().pin, 11);
        assert_eq!(parse_pin("\"gpio0\"").unwrap().pin, 0);
        assert_eq!(parse_pin("gpio30"), Err(ParseError::InvalidPin));
        assert_eq!(parse_pin("pin4"), Err(ParseError::InvalidPin));
        assert_eq!(parse_pin("gpio"), Err(ParseError::InvalidPin));
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("a = 1"), Some(("a", "1")));
        assert_eq!(parse_key_value("a = 1 # note"), Some(("a", "1")));
        assert_eq!(parse_key_value("a = \"x # y\""), Some(("a", "\"x # y\"")));
        assert_eq!(parse_key_value("a ="), None);
        assert_eq!(parse_key_value("novalue"), None);
    }

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.matrix.clk_pin.pin, 10);
        assert_eq!(config.matrix.data_pin.pin, 11);
        assert_eq!(config.matrix.cs_pin.pin, 9);
        assert_eq!(config.matrix.intensity, 4);
        assert_eq!(config.clock.utc_offset_min, -300);
        assert_eq!(config.clock.refresh_ms, 25);
        assert_eq!(config.banner.suffix.as_str(), " year # ");
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_config("").unwrap(), ClockConfig::default());
        assert_eq!(parse_config("# only a comment\n").unwrap(), ClockConfig::default());
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[clock]\nrefresh_ms = 50\n").unwrap();
        assert_eq!(config.clock.refresh_ms, 50);
        assert_eq!(config.clock.utc_offset_min, 180);
        assert_eq!(config.matrix, Default::default());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert_eq!(
            parse_config("[stepper]\nx = 1\n"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(parse_config("[matrix\n"), Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_unknown_key_ignored() {
        let config = parse_config("[matrix]\nrotation = 90\n").unwrap();
        assert_eq!(config, ClockConfig::default());
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(
            parse_config("[matrix]\nintensity = 16\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[clock]\nrefresh_ms = 0\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[clock]\nrefresh_ms = 101\n"),
            Err(ParseError::OutOfRange)
        );
        assert_eq!(
            parse_config("[clock]\nutc_offset_min = 900\n"),
            Err(ParseError::OutOfRange)
        );
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[matrix]\nintensity = high\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[banner]\nsuffix = unquoted\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[matrix]\ngarbage\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_suffix_too_long() {
        let input = "[banner]\nsuffix = \"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\"\n";
        assert_eq!(parse_config(input), Err(ParseError::OutOfRange));
    }
}
