//! Fixed timestep simulation tick
//!
//! Advances one run deterministically. Within a tick the order is fixed:
//! input resolution, then kinematics, then entity movement and timers,
//! then collision handling.

use glam::Vec2;

use super::collision::{collectible_aabb, obstacle_aabb, player_aabb};
use super::spawn::{spawn_collectible, spawn_obstacle};
use super::state::{GamePhase, GameState, MAX_RIPPLES, Ripple, VerticalState};
use super::swipe::{SwipeDir, resolve_swipe};
use crate::approach;
use crate::consts::*;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Keyboard hold state
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Pointer displacement (dx, dy), delivered on the tick the pointer
    /// was released
    pub swipe: Option<(f32, f32)>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // A finished run never ticks; restart builds a fresh state
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    // Scroll the background waves
    state.wave_offset = (state.wave_offset + WAVE_SCROLL_SPEED * dt) % 100.0;

    // Capture a new swipe intent, then decay any pending one
    if let Some((dx, dy)) = input.swipe {
        if let Some(dir) = resolve_swipe(dx, dy) {
            state.swipe_intent = Some(dir);
            state.swipe_timer = SWIPE_INTENT_WINDOW;
        }
    }
    if state.swipe_intent.is_some() {
        state.swipe_timer -= dt;
        if state.swipe_timer <= 0.0 {
            state.swipe_intent = None;
            state.swipe_timer = 0.0;
        }
    }

    // Resolve input intent. Held keys override swipe-derived intent.
    let intent_x: i8 = if input.left {
        -1
    } else if input.right {
        1
    } else {
        match state.swipe_intent {
            Some(SwipeDir::Left) => -1,
            Some(SwipeDir::Right) => 1,
            _ => 0,
        }
    };
    let intent_up = input.up || state.swipe_intent == Some(SwipeDir::Up);
    let intent_down = !intent_up && (input.down || state.swipe_intent == Some(SwipeDir::Down));

    // Horizontal kinematics with inertia
    let player = &mut state.player;
    if intent_x != 0 {
        player.vel_x =
            (player.vel_x + intent_x as f32 * ACCEL_X * dt).clamp(-MAX_SPEED_X, MAX_SPEED_X);
    } else {
        player.vel_x = approach(player.vel_x, 0.0, ACCEL_X, dt);
    }
    player.pos.x += player.vel_x * dt;
    if player.pos.x < PLAYER_MIN_X {
        player.pos.x = PLAYER_MIN_X;
        player.vel_x = 0.0;
    } else if player.pos.x > PLAYER_MAX_X {
        player.pos.x = PLAYER_MAX_X;
        player.vel_x = 0.0;
    }

    // Vertical state machine: jump and duck only start from Riding at rest
    // height, so the two can never be active together and input during the
    // return leg is ignored. `approach` lands on REST_Y exactly, so the
    // equality test is reliable.
    match player.vertical {
        VerticalState::Riding => {
            let at_rest = player.pos.y == REST_Y;
            if intent_up && at_rest {
                player.vel_y = JUMP_SPEED;
                player.vertical = VerticalState::Jumping;
            } else if intent_down && at_rest {
                player.vel_y = DUCK_SPEED;
                player.vertical = VerticalState::Ducking;
            } else {
                // Settle back toward rest height
                player.pos.y = approach(player.pos.y, REST_Y, RETURN_SPEED, dt);
                player.vel_y = 0.0;
            }
        }
        VerticalState::Jumping => {
            player.pos.y += player.vel_y * dt;
            if player.pos.y <= JUMP_APEX_Y {
                player.pos.y = JUMP_APEX_Y;
                player.vel_y = 0.0;
                player.vertical = VerticalState::Riding;
            }
        }
        VerticalState::Ducking => {
            player.pos.y += player.vel_y * dt;
            if player.pos.y >= DUCK_FLOOR_Y {
                player.pos.y = DUCK_FLOOR_Y;
                player.vel_y = 0.0;
                player.vertical = VerticalState::Riding;
            }
        }
    }

    // Advance scrolling entities, drop the ones fully off-screen left
    for obstacle in &mut state.obstacles {
        obstacle.pos.x += obstacle.vel_x * dt;
    }
    state.obstacles.retain(|o| o.pos.x >= OBSTACLE_DESPAWN_X);

    for collectible in &mut state.collectibles {
        collectible.pos.x += collectible.vel_x * dt;
    }
    state
        .collectibles
        .retain(|c| c.pos.x >= COLLECTIBLE_DESPAWN_X);

    update_ripples(state, dt);

    // Score ticks up once per second
    state.score_timer -= dt;
    while state.score_timer <= 0.0 {
        state.score += 1;
        state.score_timer += SCORE_INTERVAL;
    }

    // Spawn timers. The obstacle timer reschedules itself with a delay
    // keyed on the current score; the collectible period is fixed.
    state.obstacle_timer -= dt;
    if state.obstacle_timer <= 0.0 {
        spawn_obstacle(state);
    }
    state.collectible_timer -= dt;
    if state.collectible_timer <= 0.0 {
        spawn_collectible(state);
    }

    // Collision handling. Seashell pickups first, then obstacle hits.
    let player_box = player_aabb(&state.player);

    let mut picked = 0u64;
    state.collectibles.retain(|c| {
        if player_box.overlaps(&collectible_aabb(c)) {
            picked += 1;
            false
        } else {
            true
        }
    });
    state.score += picked * SHELL_BONUS;
    state.shells_collected += picked as u32;

    // One hit ends the run; the early return above makes the transition
    // idempotent no matter how many obstacles overlap
    if state
        .obstacles
        .iter()
        .any(|o| player_box.overlaps(&obstacle_aabb(o)))
    {
        state.phase = GamePhase::GameOver;
        log::info!("Game over at score {}", state.score);
    }

    state.normalize_order();
}

/// Update cosmetic water ripples. Hash-based placement keeps the gameplay
/// RNG stream untouched.
fn update_ripples(state: &mut GameState, dt: f32) {
    for ripple in state.ripples.iter_mut() {
        ripple.pos += ripple.vel * dt;
        ripple.life -= dt * 0.5;
        ripple.size *= 0.995;
    }
    state.ripples.retain(|r| r.life > 0.0);

    if state.time_ticks % 12 == 0 {
        if state.ripples.len() >= MAX_RIPPLES {
            state.ripples.remove(0);
        }
        let hash = (state.time_ticks as u32).wrapping_mul(2654435761);
        let x = (hash % 1000) as f32 / 1000.0 * WORLD_WIDTH;
        let y = ((hash >> 10) % 1000) as f32 / 1000.0 * WORLD_HEIGHT;
        let vx = ((hash >> 20) % 100) as f32 - 50.0;
        let vy = ((hash >> 13) % 100) as f32 - 50.0;
        state.ripples.push(Ripple {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            life: 1.0,
            size: 8.0 + (hash % 7) as f32,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Collectible, Obstacle, ObstacleKind};
    use proptest::prelude::*;

    fn held(left: bool, right: bool, up: bool, down: bool) -> TickInput {
        TickInput {
            left,
            right,
            up,
            down,
            swipe: None,
        }
    }

    fn run_ticks(state: &mut GameState, input: &TickInput, seconds: f32) {
        let ticks = (seconds / SIM_DT).round() as u32;
        for _ in 0..ticks {
            tick(state, input, SIM_DT);
        }
    }

    #[test]
    fn test_score_ticks_once_per_second() {
        let mut state = GameState::new(1);
        // Obstacles spawn from 2s on but enter far right of the player,
        // so nothing collides in this window
        run_ticks(&mut state, &TickInput::default(), 3.05);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_right_held_accelerates_and_clamps() {
        let mut state = GameState::new(1);
        let input = held(false, true, false, false);
        run_ticks(&mut state, &input, 5.0);
        assert_eq!(state.player.pos.x, PLAYER_MAX_X);
        assert_eq!(state.player.vel_x, 0.0);
    }

    #[test]
    fn test_left_held_clamps_at_min() {
        let mut state = GameState::new(1);
        let input = held(true, false, false, false);
        run_ticks(&mut state, &input, 5.0);
        assert_eq!(state.player.pos.x, PLAYER_MIN_X);
    }

    #[test]
    fn test_velocity_decays_when_released() {
        let mut state = GameState::new(1);
        run_ticks(&mut state, &held(false, true, false, false), 0.5);
        assert!(state.player.vel_x > 0.0);
        run_ticks(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.player.vel_x, 0.0);
    }

    #[test]
    fn test_jump_reaches_apex_then_returns_to_rest() {
        let mut state = GameState::new(1);
        // One tick of up input starts the jump
        tick(&mut state, &held(false, false, true, false), SIM_DT);
        assert_eq!(state.player.vertical, VerticalState::Jumping);

        // (300 - 200) / 300 px/s rise, then (300 - 200) / 300 px/s return;
        // two seconds is plenty
        run_ticks(&mut state, &TickInput::default(), 2.0);
        assert_eq!(state.player.pos.y, REST_Y);
        assert_eq!(state.player.vertical, VerticalState::Riding);
    }

    #[test]
    fn test_jump_pins_at_apex() {
        let mut state = GameState::new(1);
        tick(&mut state, &held(false, false, true, false), SIM_DT);
        let mut min_y = state.player.pos.y;
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            min_y = min_y.min(state.player.pos.y);
        }
        assert_eq!(min_y, JUMP_APEX_Y);
    }

    #[test]
    fn test_duck_pins_at_floor_then_returns() {
        let mut state = GameState::new(1);
        // Hold down past the 1s descent; the floor is the deepest point
        let mut max_y = state.player.pos.y;
        for _ in 0..150 {
            tick(&mut state, &held(false, false, false, true), SIM_DT);
            max_y = max_y.max(state.player.pos.y);
        }
        assert_eq!(max_y, DUCK_FLOOR_Y);

        run_ticks(&mut state, &TickInput::default(), 2.0);
        assert_eq!(state.player.pos.y, REST_Y);
        assert_eq!(state.player.vertical, VerticalState::Riding);
    }

    #[test]
    fn test_up_intent_ignored_during_return_descent() {
        let mut state = GameState::new(1);
        tick(&mut state, &held(false, false, true, false), SIM_DT);

        // Ride to the apex, then descend partway back
        run_ticks(&mut state, &TickInput::default(), 0.4);
        assert_eq!(state.player.vertical, VerticalState::Riding);
        let mid_y = state.player.pos.y;
        assert!(mid_y > JUMP_APEX_Y && mid_y < REST_Y);

        // Up input mid-descent must not restart the jump
        tick(&mut state, &held(false, false, true, false), SIM_DT);
        assert_eq!(state.player.vertical, VerticalState::Riding);
        assert!(state.player.pos.y > mid_y);

        // Back at rest, the next up input starts a fresh jump
        run_ticks(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.player.pos.y, REST_Y);
        tick(&mut state, &held(false, false, true, false), SIM_DT);
        assert_eq!(state.player.vertical, VerticalState::Jumping);
    }

    #[test]
    fn test_held_up_does_not_park_at_apex() {
        let mut state = GameState::new(1);
        let input = held(false, false, true, false);
        let mut reached_apex = false;
        let mut returned = false;
        for _ in 0..240 {
            tick(&mut state, &input, SIM_DT);
            if state.player.pos.y == JUMP_APEX_Y {
                reached_apex = true;
            }
            if reached_apex && state.player.pos.y == REST_Y {
                returned = true;
            }
        }
        assert!(reached_apex);
        assert!(returned);
    }

    #[test]
    fn test_no_jump_while_ducking() {
        let mut state = GameState::new(1);
        tick(&mut state, &held(false, false, false, true), SIM_DT);
        assert_eq!(state.player.vertical, VerticalState::Ducking);

        // Up input while ducking must not flip into a jump
        tick(&mut state, &held(false, false, true, false), SIM_DT);
        assert_eq!(state.player.vertical, VerticalState::Ducking);
        assert!(state.player.vel_y > 0.0);
    }

    #[test]
    fn test_up_wins_over_simultaneous_down() {
        let mut state = GameState::new(1);
        tick(&mut state, &held(false, false, true, true), SIM_DT);
        assert_eq!(state.player.vertical, VerticalState::Jumping);
    }

    #[test]
    fn test_single_game_over_transition() {
        let mut state = GameState::new(1);
        // Two obstacles stacked on the player
        for _ in 0..2 {
            let id = state.next_entity_id();
            state.obstacles.push(Obstacle {
                id,
                kind: ObstacleKind::Rock,
                pos: state.player.pos,
                vel_x: 0.0,
            });
        }

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        let score_at_death = state.score;
        let ticks_at_death = state.time_ticks;

        // Further ticks are no-ops
        run_ticks(&mut state, &TickInput::default(), 2.0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, score_at_death);
        assert_eq!(state.time_ticks, ticks_at_death);
    }

    #[test]
    fn test_pickup_adds_bonus_exactly_once() {
        let mut state = GameState::new(1);
        let id = state.next_entity_id();
        state.collectibles.push(Collectible {
            id,
            pos: state.player.pos,
            vel_x: 0.0,
        });

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, SHELL_BONUS);
        assert_eq!(state.shells_collected, 1);
        assert!(state.collectibles.is_empty());

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, SHELL_BONUS);
    }

    #[test]
    fn test_offscreen_entities_removed() {
        let mut state = GameState::new(1);
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            kind: ObstacleKind::Shark,
            pos: Vec2::new(-100.0, 250.0),
            vel_x: SCROLL_SPEED,
        });
        let id = state.next_entity_id();
        state.collectibles.push(Collectible {
            id,
            pos: Vec2::new(-100.0, 250.0),
            vel_x: SCROLL_SPEED,
        });

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.obstacles.is_empty());
        assert!(state.collectibles.is_empty());
    }

    #[test]
    fn test_first_obstacle_spawns_after_base_delay() {
        let mut state = GameState::new(1);
        run_ticks(&mut state, &TickInput::default(), 1.9);
        assert!(state.obstacles.is_empty());
        run_ticks(&mut state, &TickInput::default(), 0.6);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_swipe_starts_jump() {
        let mut state = GameState::new(1);
        let input = TickInput {
            swipe: Some((3.0, -60.0)),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.player.vertical, VerticalState::Jumping);
    }

    #[test]
    fn test_swipe_intent_decays_after_window() {
        let mut state = GameState::new(1);
        let input = TickInput {
            swipe: Some((60.0, 0.0)),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.swipe_intent, Some(SwipeDir::Right));

        run_ticks(&mut state, &TickInput::default(), 0.25);
        assert_eq!(state.swipe_intent, None);
    }

    #[test]
    fn test_keyboard_overrides_swipe_intent() {
        let mut state = GameState::new(1);
        let input = TickInput {
            swipe: Some((60.0, 0.0)),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        // Swipe said right, but a held left key wins
        tick(&mut state, &held(true, false, false, false), SIM_DT);
        assert!(state.player.vel_x < 0.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            held(false, true, false, false),
            held(false, false, true, false),
            TickInput {
                swipe: Some((-40.0, 0.0)),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in &inputs {
            for _ in 0..120 {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.obstacles.len(), state2.obstacles.len());
        assert_eq!(state1.player.pos, state2.player.pos);
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            seed in any::<u64>(),
            masks in proptest::collection::vec(0u8..16, 1..600),
        ) {
            let mut state = GameState::new(seed);
            for m in masks {
                let input = held(m & 1 != 0, m & 2 != 0, m & 4 != 0, m & 8 != 0);
                tick(&mut state, &input, SIM_DT);
                prop_assert!((PLAYER_MIN_X..=PLAYER_MAX_X).contains(&state.player.pos.x));
                prop_assert!((JUMP_APEX_Y..=DUCK_FLOOR_Y).contains(&state.player.pos.y));
            }
        }

        #[test]
        fn prop_score_monotonic_while_playing(
            seed in any::<u64>(),
            masks in proptest::collection::vec(0u8..16, 1..600),
        ) {
            let mut state = GameState::new(seed);
            for m in masks {
                let input = held(m & 1 != 0, m & 2 != 0, m & 4 != 0, m & 8 != 0);
                let before = state.score;
                tick(&mut state, &input, SIM_DT);
                prop_assert!(state.score >= before);
            }
        }

        #[test]
        fn prop_jump_and_duck_never_coincide(
            masks in proptest::collection::vec(0u8..16, 1..400),
        ) {
            // Rapid alternating input must never produce an invalid
            // vertical state; the enum makes jump+duck unrepresentable,
            // so check the velocity sign agrees with the state instead
            let mut state = GameState::new(0);
            for m in masks {
                let input = held(false, false, m & 4 != 0, m & 8 != 0);
                tick(&mut state, &input, SIM_DT);
                match state.player.vertical {
                    VerticalState::Jumping => prop_assert!(state.player.vel_y <= 0.0),
                    VerticalState::Ducking => prop_assert!(state.player.vel_y >= 0.0),
                    VerticalState::Riding => prop_assert_eq!(state.player.vel_y, 0.0),
                }
            }
        }
    }
}
