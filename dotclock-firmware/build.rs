//! Build script for dotclock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate clock.toml configuration at compile time
///
/// Mirrors the rules of the firmware's own parser so a bad file fails the
/// build instead of silently falling back to defaults on the device.
fn validate_config() {
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        fail(
            "clock.toml not found",
            &["The firmware embeds clock.toml from the dotclock-firmware directory."],
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read clock.toml", &[&e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let msg = e.to_string();
            let lines: Vec<&str> = msg.lines().collect();
            fail("Invalid TOML syntax in clock.toml", &lines);
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_matrix(&config, &mut errors);
    validate_clock(&config, &mut errors);
    validate_banner(&config, &mut errors);

    if !errors.is_empty() {
        let lines: Vec<&str> = errors.iter().map(String::as_str).collect();
        fail("Invalid clock.toml configuration", &lines);
    }

    println!("cargo:warning=clock.toml validated successfully");
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[&str]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}

/// Only the sections the firmware parser understands are allowed
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        return;
    };
    for (name, value) in table {
        match (name.as_str(), value) {
            ("matrix" | "clock" | "banner", toml::Value::Table(_)) => {}
            ("matrix" | "clock" | "banner", _) => {
                errors.push(format!("[{}] must be a table", name))
            }
            _ => errors.push(format!("unknown section or key '{}'", name)),
        }
    }
}

fn integer(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> Option<i64> {
    match config.get(section)?.get(key)? {
        toml::Value::Integer(v) => Some(*v),
        _ => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
    }
}

fn validate_matrix(config: &toml::Value, errors: &mut Vec<String>) {
    let mut pins = Vec::new();

    for key in ["clk_pin", "data_pin", "cs_pin"] {
        let Some(value) = config.get("matrix").and_then(|m| m.get(key)) else {
            continue;
        };
        let pin = value
            .as_str()
            .and_then(|s| s.strip_prefix("gpio"))
            .and_then(|n| n.parse::<u8>().ok());
        match pin {
            Some(n) if n <= 29 => {
                if pins.contains(&n) {
                    errors.push(format!("[matrix] {} reuses gpio{}", key, n));
                }
                pins.push(n);
            }
            _ => errors.push(format!("[matrix] {} must be \"gpio0\"..\"gpio29\"", key)),
        }
    }

    if let Some(level) = integer(config, "matrix", "intensity", errors) {
        if !(0..=15).contains(&level) {
            errors.push("[matrix] intensity must be 0-15".to_string());
        }
    }
}

fn validate_clock(config: &toml::Value, errors: &mut Vec<String>) {
    if let Some(offset) = integer(config, "clock", "utc_offset_min", errors) {
        if !(-720..=840).contains(&offset) {
            errors.push("[clock] utc_offset_min must be -720..840".to_string());
        }
    }
    if let Some(ms) = integer(config, "clock", "refresh_ms", errors) {
        if !(1..=100).contains(&ms) {
            errors.push("[clock] refresh_ms must be 1-100".to_string());
        }
    }
}

fn validate_banner(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(suffix) = config.get("banner").and_then(|b| b.get("suffix")) else {
        return;
    };
    match suffix.as_str() {
        Some(s) if s.len() > 48 => {
            errors.push("[banner] suffix must be at most 48 bytes".to_string())
        }
        Some(s) if s.contains(['"', '\\']) => {
            errors.push("[banner] suffix cannot contain quotes or escapes".to_string())
        }
        Some(_) => {}
        None => errors.push("[banner] suffix must be a string".to_string()),
    }
}
