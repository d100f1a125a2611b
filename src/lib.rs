//! Skyfire - A minimal vertical shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions)
//! - `render`: Draw-call abstraction over a 2D fill-rect surface
//! - `driver`: Per-frame hook glueing clear, advance and render together
//! - `platform`: Browser input mapping and canvas surface
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;

pub use render::{Color, Surface};
pub use tuning::{Tuning, TuningError};

/// Default game configuration constants
pub mod consts {
    /// Surface dimensions (canvas pixels)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Avatar defaults - moves a fixed step per directional command
    pub const AVATAR_WIDTH: f32 = 30.0;
    pub const AVATAR_HEIGHT: f32 = 30.0;
    pub const AVATAR_SPEED: f32 = 8.0;
    /// Distance from the avatar's top edge to the bottom of the surface at spawn
    pub const AVATAR_BOTTOM_OFFSET: f32 = 50.0;

    /// Projectile defaults (units per frame, travelling up)
    pub const PROJECTILE_WIDTH: f32 = 5.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    pub const PROJECTILE_SPEED: f32 = 7.0;

    /// Hostile defaults (units per frame, travelling down)
    pub const HOSTILE_WIDTH: f32 = 30.0;
    pub const HOSTILE_HEIGHT: f32 = 30.0;
    pub const HOSTILE_SPEED: f32 = 2.0;

    /// Minimum elapsed time between hostile spawns (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;

    /// Fixed frame interval used by headless runs (~60 Hz)
    pub const HEADLESS_FRAME_MS: f64 = 16.0;
}
