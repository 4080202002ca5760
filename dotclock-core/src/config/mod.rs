//! Configuration types and parser
//!
//! The configuration is a small TOML file embedded into the firmware at
//! build time and parsed at startup without allocation.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
