//! Swipe gesture resolution
//!
//! Converts a pointer-down/up displacement into a discrete directional
//! intent. The dominant axis wins; small drags below the threshold are
//! ignored so taps don't steer the surfer.

use serde::{Deserialize, Serialize};

use crate::consts::SWIPE_THRESHOLD;

/// Discrete directional intent derived from a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDir {
    Left,
    Right,
    Up,
    Down,
}

/// Resolve a pointer displacement (dx, dy in screen px, +y down) to an intent
pub fn resolve_swipe(dx: f32, dy: f32) -> Option<SwipeDir> {
    if dx.abs() > dy.abs() {
        if dx > SWIPE_THRESHOLD {
            Some(SwipeDir::Right)
        } else if dx < -SWIPE_THRESHOLD {
            Some(SwipeDir::Left)
        } else {
            None
        }
    } else if dy < -SWIPE_THRESHOLD {
        Some(SwipeDir::Up)
    } else if dy > SWIPE_THRESHOLD {
        Some(SwipeDir::Down)
    } else {
        None
    }
}
