//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dotclock-core:
//!
//! - MAX7219/MAX7221 LED-matrix chain over three bit-banged lines

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod max7219;

pub use max7219::{DriverError, Max7219Chain};
