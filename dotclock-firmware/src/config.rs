//! Configuration loading
//!
//! The configuration is compiled into the firmware from clock.toml.
//! build.rs already rejected a malformed file, so a parse failure here
//! means the two parsers disagree; the firmware then runs on defaults.

use defmt::*;

use dotclock_core::config::{parse_config, ClockConfig};

/// Embedded configuration (compiled into firmware)
/// Edit clock.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../clock.toml");

/// Load the embedded configuration, falling back to built-in defaults
pub fn load_config() -> ClockConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded embedded clock.toml");
            config
        }
        Err(e) => {
            warn!("clock.toml parse error: {}, using defaults", e);
            ClockConfig::new()
        }
    };

    info!(
        "Matrix: clk=gpio{} data=gpio{} cs=gpio{} intensity={}",
        config.matrix.clk_pin.pin,
        config.matrix.data_pin.pin,
        config.matrix.cs_pin.pin,
        config.intensity()
    );
    info!(
        "Clock: utc_offset={}min refresh={}ms",
        config.clock.utc_offset_min, config.clock.refresh_ms
    );

    config
}
