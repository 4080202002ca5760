//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod matrix;

pub use matrix::{op, MatrixDriver, MAX_INTENSITY};
