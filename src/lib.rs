//! Surf Runner - a side-scrolling surfing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, score, game over)
//! - `renderer`: WebGPU rendering pipeline with procedural sprite geometry
//! - `highscores`: LocalStorage-backed leaderboard
//! - `settings`: Player preferences

pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth movement)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions (logical pixels, +y down)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player spawn point
    pub const PLAYER_START_X: f32 = 150.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    /// Horizontal clamp for the surfer
    pub const PLAYER_MIN_X: f32 = 100.0;
    pub const PLAYER_MAX_X: f32 = 700.0;
    /// Vertical band: jump apex, rest height, duck floor
    pub const JUMP_APEX_Y: f32 = 200.0;
    pub const REST_Y: f32 = 300.0;
    pub const DUCK_FLOOR_Y: f32 = 400.0;

    /// Horizontal movement
    pub const MAX_SPEED_X: f32 = 200.0;
    pub const ACCEL_X: f32 = 500.0;
    /// Vertical movement (screen coords: negative is up)
    pub const JUMP_SPEED: f32 = -300.0;
    pub const DUCK_SPEED: f32 = 100.0;
    /// Speed of the linear return to rest height
    pub const RETURN_SPEED: f32 = 300.0;

    /// Obstacles and collectibles scroll left at this speed
    pub const SCROLL_SPEED: f32 = -200.0;
    /// Entities enter just past the right edge
    pub const SPAWN_X: f32 = 850.0;
    /// Despawn bounds (fully off-screen left)
    pub const OBSTACLE_DESPAWN_X: f32 = -60.0;
    pub const COLLECTIBLE_DESPAWN_X: f32 = -20.0;

    /// Sprite hitbox sizes (width, height)
    pub const SURFER_SIZE: (f32, f32) = (64.0, 64.0);
    pub const ROCK_SIZE: (f32, f32) = (50.0, 50.0);
    pub const SHARK_SIZE: (f32, f32) = (60.0, 30.0);
    pub const SHELL_SIZE: (f32, f32) = (20.0, 20.0);

    /// Score ticks up once per second while the run is live
    pub const SCORE_INTERVAL: f32 = 1.0;
    /// Seashells spawn on a fixed period
    pub const COLLECTIBLE_INTERVAL: f32 = 5.0;
    /// Obstacle spawn delays, selected by score thresholds
    pub const OBSTACLE_DELAY_BASE: f32 = 2.0;
    pub const OBSTACLE_DELAY_MID: f32 = 1.5;
    pub const OBSTACLE_DELAY_FAST: f32 = 1.0;
    pub const OBSTACLE_SCORE_MID: u64 = 100;
    pub const OBSTACLE_SCORE_FAST: u64 = 200;
    /// Seashell pickup bonus
    pub const SHELL_BONUS: u64 = 10;

    /// Minimum pointer displacement to register a swipe
    pub const SWIPE_THRESHOLD: f32 = 20.0;
    /// Swipe-derived intent auto-clears after this long
    pub const SWIPE_INTENT_WINDOW: f32 = 0.2;

    /// Background wave scroll speed (cosmetic)
    pub const WAVE_SCROLL_SPEED: f32 = 50.0;
}

/// Move `current` toward `target` by at most `rate * dt`, without overshoot
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let max_delta = rate * dt;
    if current < target {
        (current + max_delta).min(target)
    } else {
        (current - max_delta).max(target)
    }
}
