//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod display;

pub use display::{display_task, Matrix};
