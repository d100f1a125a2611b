//! Projectile vs hostile collision resolution
//!
//! Pairwise O(P*H) scan, no spatial partitioning. A hit removes the hostile
//! only: projectiles keep flying and can take out several hostiles in one frame.

use super::state::{Hostile, Projectile};

/// Remove every hostile overlapped by at least one projectile.
///
/// Rebuilds the hostile list in a single pass instead of splicing while
/// scanning, so no hostile is skipped when an earlier one is removed.
/// Returns the number of hostiles destroyed.
pub fn resolve_collisions(projectiles: &[Projectile], hostiles: &mut Vec<Hostile>) -> usize {
    if projectiles.is_empty() || hostiles.is_empty() {
        return 0;
    }

    let before = hostiles.len();
    hostiles.retain(|hostile| {
        match projectiles.iter().find(|p| p.collides_with(hostile)) {
            Some(p) => {
                log::trace!("Projectile {} destroyed hostile {}", p.id, hostile.id);
                false
            }
            None => true,
        }
    });
    before - hostiles.len()
}
