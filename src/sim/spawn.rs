//! Timer-driven entity spawning
//!
//! Obstacles and collectibles enter just past the right edge and scroll
//! left at a fixed speed. The obstacle timer is the game's only adaptive
//! difficulty: its delay drops in two steps as the score crosses 100 and 200.

use glam::Vec2;

use super::state::{Collectible, GameState, Obstacle, ObstacleKind};
use crate::consts::*;

/// Obstacle spawn delay for the current score: 2.0s -> 1.5s -> 1.0s
pub fn obstacle_delay_for_score(score: u64) -> f32 {
    if score >= OBSTACLE_SCORE_FAST {
        OBSTACLE_DELAY_FAST
    } else if score >= OBSTACLE_SCORE_MID {
        OBSTACLE_DELAY_MID
    } else {
        OBSTACLE_DELAY_BASE
    }
}

/// Spawn an obstacle at the right edge and reschedule the spawn timer
pub fn spawn_obstacle(state: &mut GameState) {
    let y = state.rng_state.range_f32(JUMP_APEX_Y, DUCK_FLOOR_Y);
    let kind = if state.rng_state.coin() {
        ObstacleKind::Shark
    } else {
        ObstacleKind::Rock
    };

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        kind,
        pos: Vec2::new(SPAWN_X, y),
        vel_x: SCROLL_SPEED,
    });

    state.obstacle_timer = obstacle_delay_for_score(state.score);
}

/// Spawn a seashell at the right edge; the timer period is fixed
pub fn spawn_collectible(state: &mut GameState) {
    let y = state.rng_state.range_f32(JUMP_APEX_Y, DUCK_FLOOR_Y);

    let id = state.next_entity_id();
    state.collectibles.push(Collectible {
        id,
        pos: Vec2::new(SPAWN_X, y),
        vel_x: SCROLL_SPEED,
    });

    state.collectible_timer = COLLECTIBLE_INTERVAL;
}
