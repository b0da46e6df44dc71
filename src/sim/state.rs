//! Game state and core simulation types
//!
//! Everything that defines a run lives here so a state can be serialized,
//! inspected, and replayed deterministically.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::swipe::SwipeDir;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active run
    Playing,
    /// Run ended by an obstacle hit
    GameOver,
}

/// Vertical movement state of the surfer
///
/// Modeled as an explicit state machine so jump and duck can never be
/// active at the same time, even under rapid alternating input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalState {
    /// On the water at (or returning to) rest height
    #[default]
    Riding,
    /// Rising toward the jump apex
    Jumping,
    /// Sinking toward the duck floor
    Ducking,
}

/// The player's surfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Horizontal velocity (px/s), clamped to ±MAX_SPEED_X
    pub vel_x: f32,
    /// Vertical velocity (px/s), only nonzero while jumping/ducking
    pub vel_y: f32,
    pub vertical: VerticalState,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel_x: 0.0,
            vel_y: 0.0,
            vertical: VerticalState::Riding,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Hazard types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Rock,
    Shark,
}

impl ObstacleKind {
    /// Hitbox size (width, height)
    pub fn size(&self) -> (f32, f32) {
        match self {
            ObstacleKind::Rock => ROCK_SIZE,
            ObstacleKind::Shark => SHARK_SIZE,
        }
    }
}

/// A hazard entity scrolling in from the right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    /// Leftward scroll velocity (px/s)
    pub vel_x: f32,
}

/// A seashell bonus entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub pos: Vec2,
    pub vel_x: f32,
}

/// A water ripple for visual effect (not gameplay-affecting)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ripple {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub size: f32,
}

/// Maximum ripple particles
pub const MAX_RIPPLES: usize = 64;

/// Serializable RNG state
///
/// Each draw seeds a fresh PCG32 on its own stream, so the sequence is a
/// pure function of (seed, draw index) and survives a save/load round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.draws);
        self.draws += 1;
        rng
    }

    /// Uniform f32 in [lo, hi)
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        self.next_rng().random_range(lo..hi)
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.next_rng().random_range(0..2u32) == 1
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Score: +1 per second plus seashell bonuses. Monotonic while playing.
    pub score: u64,
    /// Seashells picked up this run
    pub shells_collected: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player surfer
    pub player: Player,
    /// Active obstacles (sorted by id for determinism)
    pub obstacles: Vec<Obstacle>,
    /// Active collectibles (sorted by id for determinism)
    pub collectibles: Vec<Collectible>,
    /// Seconds until the next score increment
    pub score_timer: f32,
    /// Seconds until the next obstacle spawn
    pub obstacle_timer: f32,
    /// Seconds until the next collectible spawn
    pub collectible_timer: f32,
    /// Pending swipe-derived intent, if any
    pub swipe_intent: Option<SwipeDir>,
    /// Seconds until the swipe intent auto-clears
    pub swipe_timer: f32,
    /// Background wave scroll offset (cosmetic)
    pub wave_offset: f32,
    /// Visual ripples (not gameplay-affecting)
    #[serde(skip)]
    pub ripples: Vec<Ripple>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new run with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            score: 0,
            shells_collected: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: Player::new(),
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            score_timer: SCORE_INTERVAL,
            obstacle_timer: OBSTACLE_DELAY_BASE,
            collectible_timer: COLLECTIBLE_INTERVAL,
            swipe_intent: None,
            swipe_timer: 0.0,
            wave_offset: 0.0,
            ripples: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Whether the run is still live
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.obstacles.sort_by_key(|o| o.id);
        self.collectibles.sort_by_key(|c| c.id);
    }
}
