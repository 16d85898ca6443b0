//! Platform abstraction layer
//!
//! The windowing layer itself lives outside the crate; this module holds the
//! event types it delivers and the screen-to-simulation coordinate mapping.

pub mod input;

pub use input::{PointerButton, PointerPress, Resize, screen_to_sim};
