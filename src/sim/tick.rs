//! Timestamp-driven simulation step
//!
//! One call to `advance` per displayed frame. Commands are applied the moment
//! they arrive, between frames, through `apply_command`.

use super::collision::resolve_collisions;
use super::state::{Direction, SimState};

/// Discrete input command delivered between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Fire,
    /// Stop scheduling frames
    Stop,
}

/// What happened during one `advance`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub spawned: bool,
    pub expired_projectiles: usize,
    pub departed_hostiles: usize,
    pub destroyed_hostiles: usize,
}

/// Apply a command immediately
pub fn apply_command(state: &mut SimState, command: Command) {
    match command {
        Command::Move(dir) => state.move_avatar(dir),
        Command::Fire => state.fire(),
        Command::Stop => state.stop(),
    }
}

/// Advance the simulation to `timestamp_ms`
///
/// Order per frame:
/// 1. avatar hook
/// 2. drop projectiles (and departed hostiles) that left the surface
/// 3. move projectiles, then hostiles
/// 4. spawn at most one hostile once the spawn interval has strictly elapsed
/// 5. resolve collisions
///
/// Panics if `timestamp_ms` is not finite or goes backwards.
pub fn advance(state: &mut SimState, timestamp_ms: f64) -> FrameReport {
    assert!(timestamp_ms.is_finite(), "frame timestamp must be finite: {timestamp_ms}");
    if let Some(last) = state.last_timestamp_ms {
        assert!(
            timestamp_ms >= last,
            "frame timestamp went backwards: {timestamp_ms} < {last}"
        );
    }
    state.last_timestamp_ms = Some(timestamp_ms);
    state.frame += 1;

    let mut report = FrameReport::default();

    state.avatar.update();

    let before = state.projectiles.len();
    state.projectiles.retain(|p| p.is_visible());
    report.expired_projectiles = before - state.projectiles.len();

    if state.tuning.cull_departed_hostiles {
        let surface_height = state.tuning.surface_height;
        let before = state.hostiles.len();
        state.hostiles.retain(|h| h.is_on_surface(surface_height));
        report.departed_hostiles = before - state.hostiles.len();
    }

    for projectile in &mut state.projectiles {
        projectile.update();
    }
    for hostile in &mut state.hostiles {
        hostile.update();
    }

    // Coarse timer: a long gap still yields a single spawn
    if timestamp_ms - state.last_spawn_ms > state.tuning.spawn_interval_ms {
        state.spawn_hostile();
        state.last_spawn_ms = timestamp_ms;
        report.spawned = true;
    }

    report.destroyed_hostiles = resolve_collisions(&state.projectiles, &mut state.hostiles);

    if report.expired_projectiles > 0 || report.departed_hostiles > 0 {
        log::trace!(
            "Frame {}: {} projectiles expired, {} hostiles departed",
            state.frame,
            report.expired_projectiles,
            report.departed_hostiles
        );
    }
    if report.destroyed_hostiles > 0 {
        log::debug!(
            "Frame {}: {} hostiles destroyed",
            state.frame,
            report.destroyed_hostiles
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Hostile, Rect};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn new_state() -> SimState {
        SimState::new(Tuning::default(), 12345)
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = new_state();
        let spawns: Vec<bool> = [0.0, 500.0, 1001.0, 1500.0]
            .into_iter()
            .map(|t| advance(&mut state, t).spawned)
            .collect();
        assert_eq!(spawns, vec![false, false, true, false]);
        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.last_spawn_ms, 1001.0);
    }

    #[test]
    fn test_spawn_requires_strictly_greater() {
        let mut state = new_state();
        assert!(!advance(&mut state, 1000.0).spawned);
        assert!(advance(&mut state, 1000.5).spawned);
    }

    #[test]
    fn test_long_gap_spawns_once() {
        let mut state = new_state();
        let report = advance(&mut state, 10_000.0);
        assert!(report.spawned);
        assert_eq!(state.hostiles.len(), 1);
        assert!(!advance(&mut state, 10_016.0).spawned);
    }

    #[test]
    fn test_fire_then_advance_end_to_end() {
        let mut state = new_state();
        assert_eq!(state.avatar.rect.pos, Vec2::new(385.0, 550.0));

        apply_command(&mut state, Command::Fire);
        assert_eq!(state.projectiles[0].rect.pos, Vec2::new(400.0, 550.0));

        advance(&mut state, 0.0);
        let report = advance(&mut state, 16.0);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].rect.pos, Vec2::new(400.0, 536.0));
        assert!(state.hostiles.is_empty());
        assert_eq!(report.destroyed_hostiles, 0);
    }

    #[test]
    fn test_projectile_expires_before_motion() {
        let mut state = new_state();
        state.fire();
        state.projectiles[0].rect.pos.y = -9.0;

        // Bottom at 1: still visible when filtered, then moves off
        let report = advance(&mut state, 0.0);
        assert_eq!(report.expired_projectiles, 0);
        assert_eq!(state.projectiles[0].rect.pos.y, -16.0);

        let report = advance(&mut state, 16.0);
        assert_eq!(report.expired_projectiles, 1);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_hostiles_descend_each_frame() {
        let mut state = new_state();
        advance(&mut state, 1001.0);
        let y0 = state.hostiles[0].rect.pos.y;
        advance(&mut state, 1017.0);
        assert_eq!(state.hostiles[0].rect.pos.y, y0 + 2.0);
    }

    #[test]
    fn test_projectile_hits_hostile_and_survives() {
        let mut state = new_state();
        state.fire();
        let muzzle = state.avatar.muzzle();
        let id = state.next_entity_id();
        state.hostiles.push(Hostile {
            id,
            rect: Rect::new(Vec2::new(muzzle.x - 15.0, muzzle.y - 40.0), Vec2::new(30.0, 30.0)),
            speed: 2.0,
        });

        let mut destroyed = 0;
        let mut t = 0.0;
        while state.hostiles.iter().any(|h| h.id == id) && t < 500.0 {
            destroyed += advance(&mut state, t).destroyed_hostiles;
            t += 16.0;
        }
        assert_eq!(destroyed, 1);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_departed_hostiles_culled() {
        let mut state = new_state();
        state.spawn_hostile();
        state.hostiles[0].rect.pos.y = 599.0;

        advance(&mut state, 0.0);
        assert_eq!(state.hostiles.len(), 1);
        let report = advance(&mut state, 16.0);
        assert_eq!(report.departed_hostiles, 1);
        assert!(state.hostiles.is_empty());
    }

    #[test]
    fn test_departed_hostiles_kept_without_culling() {
        let mut tuning = Tuning::default();
        tuning.cull_departed_hostiles = false;
        let mut state = SimState::new(tuning, 1);
        state.spawn_hostile();
        state.hostiles[0].rect.pos.y = 599.0;

        for i in 0..10 {
            let report = advance(&mut state, i as f64 * 16.0);
            assert_eq!(report.departed_hostiles, 0);
        }
        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.hostiles[0].rect.pos.y, 619.0);
    }

    #[test]
    fn test_move_commands() {
        let mut state = new_state();
        apply_command(&mut state, Command::Move(Direction::Left));
        apply_command(&mut state, Command::Move(Direction::Up));
        assert_eq!(state.avatar.rect.pos, Vec2::new(377.0, 542.0));
    }

    #[test]
    fn test_stop_command() {
        let mut state = new_state();
        apply_command(&mut state, Command::Stop);
        assert!(!state.is_running());
    }

    #[test]
    fn test_equal_timestamps_allowed() {
        let mut state = new_state();
        advance(&mut state, 16.0);
        advance(&mut state, 16.0);
        assert_eq!(state.frame, 2);
    }

    #[test]
    #[should_panic(expected = "went backwards")]
    fn test_backwards_timestamp_panics() {
        let mut state = new_state();
        advance(&mut state, 100.0);
        advance(&mut state, 50.0);
    }

    #[test]
    #[should_panic(expected = "must be finite")]
    fn test_nan_timestamp_panics() {
        let mut state = new_state();
        advance(&mut state, f64::NAN);
    }
}
