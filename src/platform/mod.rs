//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time (frame timestamps to deltas)
//! - Input events
//! - Browser bindings (wasm32 only)

pub mod input;
pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputEvent, Pointer};
pub use time::FrameClock;
