//! Board-agnostic core logic for the dot-matrix clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Bit-addressable framebuffer and shape drawing
//! - Bitmap fonts (Latin and Cyrillic) and right-to-left text renderer
//! - Day-count to calendar decomposition
//! - Clock renderer (scrolling date banner and sliding-seconds face)
//! - Time base, message overlay and remote command handling
//! - Configuration type definitions and parser
//! - Hardware abstraction trait for the LED-matrix chain

#![no_std]
#![deny(unsafe_code)]

pub mod calendar;
pub mod clock;
pub mod command;
pub mod config;
pub mod controller;
pub mod font;
pub mod framebuffer;
pub mod message;
pub mod shape;
pub mod time;
pub mod traits;

pub use framebuffer::{FrameBuffer, CHIP_COUNT, HEIGHT, WIDTH};
pub use shape::Shape;
