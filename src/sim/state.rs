//! Game state and core simulation types
//!
//! `SimState` exclusively owns every entity. Nothing outside the simulation
//! holds a reference to an avatar, projectile or hostile between frames.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::tuning::Tuning;

/// Directional move command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The player's avatar
#[derive(Debug, Clone)]
pub struct Avatar {
    pub rect: Rect,
    /// Distance covered per directional command
    pub speed: f32,
}

impl Avatar {
    /// Centered horizontally, `bottom_offset` above the bottom edge
    pub fn new(tuning: &Tuning) -> Self {
        let size = tuning.avatar.size();
        let pos = Vec2::new(
            (tuning.surface_width - size.x) / 2.0,
            tuning.surface_height - tuning.avatar_bottom_offset,
        );
        Self {
            rect: Rect::new(pos, size),
            speed: tuning.avatar.speed,
        }
    }

    /// Move one step along `dir`, clamped so the avatar stays on the surface
    pub fn step(&mut self, dir: Direction, surface: Vec2) {
        let max = surface - self.rect.size;
        let pos = &mut self.rect.pos;
        match dir {
            Direction::Left => pos.x = (pos.x - self.speed).max(0.0),
            Direction::Right => pos.x = (pos.x + self.speed).min(max.x),
            Direction::Up => pos.y = (pos.y - self.speed).max(0.0),
            Direction::Down => pos.y = (pos.y + self.speed).min(max.y),
        }
    }

    /// Per-frame hook. The avatar only moves on commands, so nothing happens here yet.
    pub fn update(&mut self) {}

    /// Top-center point, where projectiles are launched from
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.rect.pos.x + self.rect.size.x / 2.0, self.rect.pos.y)
    }
}

/// A projectile travelling toward the top edge
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub rect: Rect,
    pub speed: f32,
}

impl Projectile {
    pub fn update(&mut self) {
        self.rect.pos.y -= self.speed;
    }

    /// False once the projectile has fully left through the top edge
    pub fn is_visible(&self) -> bool {
        self.rect.bottom() > 0.0
    }

    pub fn collides_with(&self, hostile: &Hostile) -> bool {
        self.rect.overlaps(&hostile.rect)
    }
}

/// A hostile descending toward the bottom edge
#[derive(Debug, Clone)]
pub struct Hostile {
    pub id: u32,
    pub rect: Rect,
    pub speed: f32,
}

impl Hostile {
    pub fn update(&mut self) {
        self.rect.pos.y += self.speed;
    }

    /// False once the hostile has fully left through the bottom edge
    pub fn is_on_surface(&self, surface_height: f32) -> bool {
        self.rect.top() < surface_height
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub avatar: Avatar,
    /// Live projectiles, oldest first
    pub projectiles: Vec<Projectile>,
    /// Live hostiles, oldest first
    pub hostiles: Vec<Hostile>,
    /// Cleared by `stop`; the frame driver checks it before scheduling again
    pub running: bool,
    /// Timestamp (ms) of the most recent spawn, 0 before the first one
    pub last_spawn_ms: f64,
    /// Timestamp (ms) passed to the previous `advance`
    pub last_timestamp_ms: Option<f64>,
    /// Number of frames advanced
    pub frame: u64,
    rng: Pcg32,
    next_id: u32,
}

impl SimState {
    /// Create a new simulation. Panics if `tuning` is invalid.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        if let Err(e) = tuning.validate() {
            panic!("{e}");
        }
        Self {
            seed,
            avatar: Avatar::new(&tuning),
            tuning,
            projectiles: Vec::new(),
            hostiles: Vec::new(),
            running: true,
            last_spawn_ms: 0.0,
            last_timestamp_ms: None,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn surface(&self) -> Vec2 {
        self.tuning.surface()
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn move_avatar(&mut self, dir: Direction) {
        let surface = self.surface();
        self.avatar.step(dir, surface);
    }

    /// Launch a projectile from the avatar's top-center. No cooldown.
    pub fn fire(&mut self) {
        let id = self.next_entity_id();
        let cfg = self.tuning.projectile;
        self.projectiles.push(Projectile {
            id,
            rect: Rect::new(self.avatar.muzzle(), cfg.size()),
            speed: cfg.speed,
        });
    }

    /// Append a hostile at a random offset along the top edge
    pub fn spawn_hostile(&mut self) {
        let cfg = self.tuning.hostile;
        let span = self.tuning.surface_width - cfg.width;
        let x = if span > 0.0 {
            self.rng.random_range(0.0..span)
        } else {
            0.0
        };
        let id = self.next_entity_id();
        self.hostiles.push(Hostile {
            id,
            rect: Rect::new(Vec2::new(x, 0.0), cfg.size()),
            speed: cfg.speed,
        });
        log::debug!("Spawned hostile {} at x={:.1}", id, x);
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("Simulation stopped after {} frames", self.frame);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
