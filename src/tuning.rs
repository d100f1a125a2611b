//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a JSON file can retune the
//! game without a rebuild. Missing fields fall back to `crate::consts`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning load/validation errors
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values that would break entity invariants
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Size and speed of one entity kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityTuning {
    pub width: f32,
    pub height: f32,
    /// Units per frame (projectile/hostile) or per command (avatar)
    pub speed: f32,
}

impl EntityTuning {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn validate(&self, name: &str, surface: Vec2) -> Result<(), TuningError> {
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0) {
            return Err(TuningError::Invalid(format!(
                "{name} size must be finite and positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(TuningError::Invalid(format!(
                "{name} speed must be finite and non-negative, got {}",
                self.speed
            )));
        }
        if self.width > surface.x || self.height > surface.y {
            return Err(TuningError::Invalid(format!(
                "{name} ({}x{}) does not fit on the {}x{} surface",
                self.width, self.height, surface.x, surface.y
            )));
        }
        Ok(())
    }
}

/// Complete tuning table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub surface_width: f32,
    pub surface_height: f32,
    pub avatar: EntityTuning,
    /// Avatar spawns this far above the bottom edge
    pub avatar_bottom_offset: f32,
    pub projectile: EntityTuning,
    pub hostile: EntityTuning,
    pub spawn_interval_ms: f64,
    /// Drop hostiles once they are fully below the surface.
    /// `false` keeps them falling forever.
    pub cull_departed_hostiles: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            avatar: EntityTuning {
                width: AVATAR_WIDTH,
                height: AVATAR_HEIGHT,
                speed: AVATAR_SPEED,
            },
            avatar_bottom_offset: AVATAR_BOTTOM_OFFSET,
            projectile: EntityTuning {
                width: PROJECTILE_WIDTH,
                height: PROJECTILE_HEIGHT,
                speed: PROJECTILE_SPEED,
            },
            hostile: EntityTuning {
                width: HOSTILE_WIDTH,
                height: HOSTILE_HEIGHT,
                speed: HOSTILE_SPEED,
            },
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            cull_departed_hostiles: true,
        }
    }
}

impl Tuning {
    pub fn surface(&self) -> Vec2 {
        Vec2::new(self.surface_width, self.surface_height)
    }

    /// Parse and validate a JSON tuning table
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning table from disk (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&contents)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let surface = self.surface();
        if !(surface.is_finite() && surface.x > 0.0 && surface.y > 0.0) {
            return Err(TuningError::Invalid(format!(
                "surface must be finite and positive, got {}x{}",
                surface.x, surface.y
            )));
        }
        self.avatar.validate("avatar", surface)?;
        self.projectile.validate("projectile", surface)?;
        self.hostile.validate("hostile", surface)?;

        if !(self.avatar_bottom_offset >= self.avatar.height && self.avatar_bottom_offset <= surface.y) {
            return Err(TuningError::Invalid(format!(
                "avatar_bottom_offset must lie in [{}, {}], got {}",
                self.avatar.height, surface.y, self.avatar_bottom_offset
            )));
        }
        if !(self.spawn_interval_ms.is_finite() && self.spawn_interval_ms >= 0.0) {
            return Err(TuningError::Invalid(format!(
                "spawn_interval_ms must be finite and non-negative, got {}",
                self.spawn_interval_ms
            )));
        }
        Ok(())
    }
}
