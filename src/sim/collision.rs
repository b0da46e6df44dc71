//! Overlap detection between the surfer and scrolling entities
//!
//! Everything in the game is an axis-aligned box, so collision is a plain
//! AABB overlap test on sprite-sized hitboxes centered on entity positions.

use glam::Vec2;

use super::state::{Collectible, Obstacle, Player};
use crate::consts::{SHELL_SIZE, SURFER_SIZE};

/// An axis-aligned box, center plus half-extents
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Overlap test; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        d.x < self.half.x + other.half.x && d.y < self.half.y + other.half.y
    }
}

/// Hitbox for the surfer sprite
pub fn player_aabb(player: &Player) -> Aabb {
    Aabb::new(player.pos, SURFER_SIZE.0, SURFER_SIZE.1)
}

/// Hitbox for an obstacle, sized by its kind
pub fn obstacle_aabb(obstacle: &Obstacle) -> Aabb {
    let (w, h) = obstacle.kind.size();
    Aabb::new(obstacle.pos, w, h)
}

/// Hitbox for a seashell
pub fn collectible_aabb(collectible: &Collectible) -> Aabb {
    Aabb::new(collectible.pos, SHELL_SIZE.0, SHELL_SIZE.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), 10.0, 10.0);
        let b = Aabb::new(Vec2::new(8.0, 0.0), 10.0, 10.0);
        let c = Aabb::new(Vec2::new(20.0, 0.0), 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), 10.0, 10.0);
        let b = Aabb::new(Vec2::new(10.0, 0.0), 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_shark_hitbox_is_wider_than_tall() {
        let shark = Obstacle {
            id: 1,
            kind: ObstacleKind::Shark,
            pos: Vec2::new(100.0, 300.0),
            vel_x: -200.0,
        };
        let aabb = obstacle_aabb(&shark);
        assert!(aabb.half.x > aabb.half.y);
    }

    #[test]
    fn test_player_misses_obstacle_above() {
        let player = Player::new(); // at (150, 300), 64x64
        let rock = Obstacle {
            id: 1,
            kind: ObstacleKind::Rock,
            pos: Vec2::new(150.0, 200.0),
            vel_x: -200.0,
        };
        // Vertical gap: |300-200| = 100 > 32 + 25
        assert!(!player_aabb(&player).overlaps(&obstacle_aabb(&rock)));
    }

    #[test]
    fn test_player_hits_overlapping_obstacle() {
        let player = Player::new();
        let rock = Obstacle {
            id: 1,
            kind: ObstacleKind::Rock,
            pos: Vec2::new(180.0, 310.0),
            vel_x: -200.0,
        };
        assert!(player_aabb(&player).overlaps(&obstacle_aabb(&rock)));
    }
}
