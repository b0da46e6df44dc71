//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod swipe;
pub mod tick;

pub use collision::{Aabb, collectible_aabb, obstacle_aabb, player_aabb};
pub use spawn::{obstacle_delay_for_score, spawn_collectible, spawn_obstacle};
pub use state::{
    Collectible, GamePhase, GameState, Obstacle, ObstacleKind, Player, VerticalState,
};
pub use swipe::{SwipeDir, resolve_swipe};
pub use tick::{TickInput, tick};
