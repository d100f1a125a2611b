//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key names to commands)
//! - The 2D canvas surface (web only)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod input;

pub use input::command_for_key;
