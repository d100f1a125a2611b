//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Timestamps come from the caller only
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each collection)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::resolve_collisions;
pub use rect::Rect;
pub use state::{Avatar, Direction, Hostile, Projectile, SimState};
pub use tick::{Command, FrameReport, advance, apply_command};
