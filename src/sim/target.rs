//! Circular targets
//!
//! Ages are measured on the session clock (seconds of Running time), so a
//! target does not age while the session is paused.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A clickable circular target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Session clock value when the target appeared
    pub spawned_at: f32,
}

impl Target {
    pub fn new(id: u32, pos: Vec2, radius: f32, spawned_at: f32) -> Self {
        Self {
            id,
            pos,
            radius,
            spawned_at,
        }
    }

    /// Seconds since spawn
    #[inline]
    pub fn age(&self, now: f32) -> f32 {
        now - self.spawned_at
    }

    /// Remaining life in [0, 1]: 1 at spawn, 0 at expiry
    pub fn life_fraction(&self, now: f32, lifespan: f32) -> f32 {
        if lifespan <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age(now) / lifespan).clamp(0.0, 1.0)
    }

    pub fn is_expired(&self, now: f32, lifespan: f32) -> bool {
        self.age(now) >= lifespan
    }

    /// Point-in-circle test (boundary counts as inside)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }
}

/// Index of the topmost target under `point`.
///
/// Later entries are drawn on top, so the scan runs newest-first and the most
/// recently spawned target wins overlapping hits.
pub fn topmost_hit(targets: &[Target], point: Vec2) -> Option<usize> {
    targets.iter().rposition(|t| t.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_boundary() {
        let t = Target::new(1, Vec2::new(100.0, 100.0), 20.0, 0.0);
        assert!(t.contains(Vec2::new(100.0, 100.0)));
        assert!(t.contains(Vec2::new(120.0, 100.0)));
        assert!(t.contains(Vec2::new(112.0, 116.0))); // 12-16-20 triangle
        assert!(!t.contains(Vec2::new(120.1, 100.0)));
    }

    #[test]
    fn test_life_fraction() {
        let t = Target::new(1, Vec2::ZERO, 10.0, 2.0);
        assert_eq!(t.life_fraction(2.0, 2.5), 1.0);
        assert!((t.life_fraction(3.25, 2.5) - 0.5).abs() < 1e-6);
        assert_eq!(t.life_fraction(10.0, 2.5), 0.0);
        assert!(!t.is_expired(4.49, 2.5));
        assert!(t.is_expired(4.5, 2.5));
    }

    #[test]
    fn test_topmost_hit_prefers_newest() {
        let older = Target::new(1, Vec2::new(100.0, 100.0), 30.0, 0.0);
        let newer = Target::new(2, Vec2::new(110.0, 100.0), 30.0, 0.5);
        let targets = vec![older, newer];

        // Closer to the older center, but the newer one is on top
        let idx = topmost_hit(&targets, Vec2::new(101.0, 100.0));
        assert_eq!(idx, Some(1));

        // Only the older one covers this point
        let idx = topmost_hit(&targets, Vec2::new(75.0, 100.0));
        assert_eq!(idx, Some(0));

        assert_eq!(topmost_hit(&targets, Vec2::new(500.0, 500.0)), None);
    }
}
