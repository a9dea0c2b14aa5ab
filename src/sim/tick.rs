//! Fixed timestep simulation step
//!
//! Each invocation derives the next snapshot entirely from the previous one
//! plus the current held-key state. The only hidden hand is the generator
//! RNG, which rides inside the snapshot itself.

use crate::consts::*;

use super::collision::is_landing;
use super::input::InputState;
use super::platform::generate_platform;
use super::state::{GamePhase, GameState};

/// Advance the game by one fixed tick, producing the next snapshot.
///
/// Outside `Playing` this is a guard-clause no-op (the scheduler should not
/// be draining ticks then anyway).
pub fn step(prev: &GameState, input: &InputState) -> GameState {
    let mut state = prev.clone();
    if state.phase != GamePhase::Playing {
        return state;
    }
    advance(&mut state, input);
    state
}

fn advance(state: &mut GameState, input: &InputState) {
    // The state machine's init contract guarantees the floor exists.
    debug_assert_eq!(
        state.platforms.iter().filter(|p| p.is_ground).count(),
        1,
        "platform field must contain exactly one ground platform"
    );

    let tuning = state.tuning;
    let mut pos = state.player.pos;
    let mut vy = state.player.vy;

    // Horizontal movement; both keys held cancel out. Clamp to the viewport.
    if input.left_held {
        pos.x -= tuning.move_speed;
    }
    if input.right_held {
        pos.x += tuning.move_speed;
    }
    pos.x = pos.x.clamp(0.0, GAME_WIDTH - PLAYER_SIZE);

    // Vertical physics
    vy += tuning.gravity;
    pos.y += vy;

    // Collision resolution in spawn order: the first matching platform wins
    // the tie-break, bounces the player and retires itself. Later platforms
    // that also qualify this tick stay untouched.
    let mut landed = false;
    for platform in &mut state.platforms {
        if is_landing(pos, vy, platform) {
            pos.y = platform.y - PLAYER_SIZE;
            vy = -tuning.jump_velocity;
            platform.active = false;
            landed = true;
            break;
        }
    }
    if landed {
        state.score += 1;
        log::debug!("landed, score {}", state.score);
    }

    // Extend the field upward once the topmost platform has scrolled past
    // the point where a new one should exist above it.
    let top_y = state.platforms.last().map(|p| p.y);
    if let Some(top_y) = top_y
        && top_y > 0.0
    {
        let spawn_y = top_y - tuning.platform_spacing;
        let platform = generate_platform(&mut state.rng, spawn_y, state.score, &tuning);
        state.platforms.push(platform);
    }

    // Drop platforms that scrolled fully below the viewport. The ground is
    // exempt: it stays as the permanent floor even once off-screen.
    state.platforms.retain(|p| p.is_ground || p.y < GAME_HEIGHT);

    // Terminal check: fell to or past the floor line. Commit the high score
    // and stop before the camera touches anything.
    if pos.y >= GAME_HEIGHT - PLAYER_SIZE {
        state.player.pos = pos;
        state.player.vy = vy;
        state.high_score = state.high_score.max(state.score);
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over: score {}, high score {}",
            state.score,
            state.high_score
        );
        return;
    }

    // Camera scroll: once the player rises above the vertical midline, pin
    // it there and shift the whole world down by the overshoot.
    let scroll = GAME_HEIGHT / 2.0 - pos.y;
    if scroll > 0.0 {
        pos.y += scroll;
        for platform in &mut state.platforms {
            platform.y += scroll;
        }
    }

    state.player.pos = pos;
    state.player.vy = vy;
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use crate::sim::state::{Platform, Player};

    use super::*;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.start();
        state
    }

    /// A platform placed by hand, active, off the generator's band.
    fn test_platform(x: f32, y: f32) -> Platform {
        Platform {
            x,
            y,
            width: 80.0,
            active: true,
            is_ground: false,
        }
    }

    #[test]
    fn step_is_a_noop_outside_playing() {
        let state = GameState::new(1);
        let next = step(&state, &InputState::default());
        assert_eq!(next.phase, GamePhase::NotStarted);
        assert_eq!(next.player, state.player);
        assert_eq!(next.platforms, state.platforms);
    }

    #[test]
    fn held_directions_move_and_cancel() {
        let state = playing_state(1);
        let left = InputState {
            left_held: true,
            right_held: false,
        };
        let both = InputState {
            left_held: true,
            right_held: true,
        };

        let moved = step(&state, &left);
        assert_eq!(moved.player.pos.x, state.player.pos.x - 6.0);

        let canceled = step(&state, &both);
        assert_eq!(canceled.player.pos.x, state.player.pos.x);
    }

    #[test]
    fn landing_snaps_bounces_scores_and_retires_the_platform() {
        let mut state = playing_state(1);
        state.platforms.retain(|p| p.is_ground);
        state.platforms.push(test_platform(280.0, 300.0));
        // Falling, bottom entering the band this tick
        state.player.pos = Vec2::new(300.0, 235.0);
        state.player.vy = 8.0;

        let next = step(&state, &InputState::default());
        assert_eq!(next.score, 1);
        let platform = next.platforms.iter().find(|p| !p.is_ground).unwrap();
        assert!(!platform.active);
        assert_eq!(next.player.vy, -16.0);
        // Snapped flush, then camera-scrolled along with the platform
        assert_eq!(next.player.pos.y + PLAYER_SIZE, platform.y);
    }

    #[test]
    fn overlapping_platforms_score_once_first_match_wins() {
        let mut state = playing_state(1);
        state.platforms.retain(|p| p.is_ground);
        // Two active platforms in the exact same band
        state.platforms.push(test_platform(280.0, 300.0));
        state.platforms.push(test_platform(290.0, 300.0));
        state.player.pos = Vec2::new(300.0, 235.0);
        state.player.vy = 8.0;

        let next = step(&state, &InputState::default());
        assert_eq!(next.score, 1);
        let non_ground: Vec<_> = next.platforms.iter().filter(|p| !p.is_ground).collect();
        assert!(!non_ground[0].active, "first in spawn order takes the hit");
        assert!(non_ground[1].active, "later overlap stays untouched");
    }

    #[test]
    fn ascending_through_a_platform_does_not_land() {
        let mut state = playing_state(1);
        state.platforms.retain(|p| p.is_ground);
        state.platforms.push(test_platform(280.0, 300.0));
        state.player.pos = Vec2::new(300.0, 260.0);
        state.player.vy = -12.0;

        let next = step(&state, &InputState::default());
        assert_eq!(next.score, 0);
        assert!(next.platforms.iter().any(|p| p.active && !p.is_ground));
    }

    #[test]
    fn field_extends_above_the_topmost_platform() {
        let mut state = playing_state(1);
        state.platforms.retain(|p| p.is_ground);
        state.platforms.push(test_platform(100.0, 100.0));
        // Airborne, below the midline (no scroll), clear of everything
        state.player.pos = Vec2::new(0.0, 320.0);
        state.player.vy = 0.0;

        let next = step(&state, &InputState::default());
        let top = *next.topmost().unwrap();
        assert_eq!(top.y, 100.0 - state.tuning.platform_spacing);
        assert!(top.active && !top.is_ground);
    }

    #[test]
    fn no_spawn_while_the_topmost_platform_is_above_the_viewport_top() {
        let mut state = playing_state(1);
        // The initial field's topmost platform sits above y = 0 already
        assert!(state.topmost().unwrap().y < 0.0);
        let count_before = state.platforms.len();
        state.player.pos = Vec2::new(0.0, 320.0);
        state.player.vy = 0.0;

        let next = step(&state, &InputState::default());
        assert_eq!(next.platforms.len(), count_before);
    }

    #[test]
    fn offscreen_platforms_are_dropped_but_the_ground_survives() {
        let mut state = playing_state(1);
        state.platforms.retain(|p| p.is_ground);
        let mut gone = test_platform(100.0, GAME_HEIGHT + 20.0);
        gone.active = false;
        state.platforms.push(gone);
        state.platforms.push(test_platform(100.0, -40.0));
        // Push the ground below the viewport as a long climb would
        state.platforms[0].y = GAME_HEIGHT + 300.0;
        // Keep the player airborne and clear of everything
        state.player.pos = Vec2::new(0.0, 320.0);
        state.player.vy = 0.0;

        let next = step(&state, &InputState::default());
        assert!(next.platforms.iter().any(|p| p.is_ground));
        assert!(!next.platforms.iter().any(|p| !p.is_ground && p.y >= GAME_HEIGHT));
    }

    #[test]
    fn falling_past_the_floor_ends_the_life_and_commits_the_high_score() {
        let mut state = playing_state(1);
        state.platforms.retain(|p| p.is_ground);
        state.score = 4;
        state.high_score = 9;
        state.player.pos = Vec2::new(0.0, GAME_HEIGHT - PLAYER_SIZE - 1.0);
        state.player.vy = 10.0;

        let next = step(&state, &InputState::default());
        assert_eq!(next.phase, GamePhase::GameOver);
        assert_eq!(next.high_score, 9, "lower score never lowers the best");

        let mut state = playing_state(1);
        state.platforms.retain(|p| p.is_ground);
        state.score = 12;
        state.high_score = 9;
        state.player.pos = Vec2::new(0.0, GAME_HEIGHT - PLAYER_SIZE - 1.0);
        state.player.vy = 10.0;

        let next = step(&state, &InputState::default());
        assert_eq!(next.phase, GamePhase::GameOver);
        assert_eq!(next.high_score, 12);
    }

    #[test]
    fn fresh_session_falls_through_to_game_over_with_zero_score() {
        // Keep the player right of every generated platform (the score-0
        // band never reaches past x = MID + gap) so nothing is ever touched.
        let mut state = playing_state(99);
        state.player.pos.x = 300.0;

        let input = InputState::default();
        let mut ticks = 0;
        while state.phase == GamePhase::Playing {
            state = step(&state, &input);
            ticks += 1;
            assert!(ticks < 10_000, "life must terminate");
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 0);
    }

    #[test]
    fn one_landing_then_falling_off_yields_score_one() {
        let mut state = playing_state(5);
        state.platforms.retain(|p| p.is_ground);
        // One platform in the player's path, one far off to the side
        state.platforms.push(test_platform(280.0, 390.0));
        state.platforms.push(test_platform(10.0, 230.0));
        state.player.pos.x = 300.0;

        let input = InputState::default();
        let mut landed_snapshot = None;
        let mut ticks = 0;
        while state.phase == GamePhase::Playing {
            state = step(&state, &input);
            if state.score == 1 && landed_snapshot.is_none() {
                landed_snapshot = Some(state.clone());
            }
            ticks += 1;
            assert!(ticks < 100_000, "life must terminate");
        }

        let at_landing = landed_snapshot.expect("the scripted platform must be hit");
        let hit: Vec<_> = at_landing
            .platforms
            .iter()
            .filter(|p| !p.is_ground && !p.active)
            .collect();
        assert_eq!(hit.len(), 1, "exactly one platform was used");
        assert!(
            at_landing
                .platforms
                .iter()
                .filter(|p| !p.is_ground && p.active)
                .count()
                >= 1,
            "the bystander platform is unchanged"
        );
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, 1);
    }

    proptest! {
        #[test]
        fn player_x_stays_inside_the_viewport(
            seed in any::<u64>(),
            keys in prop::collection::vec((any::<bool>(), any::<bool>()), 1..120),
        ) {
            let mut state = playing_state(seed);
            for (left, right) in keys {
                let input = InputState { left_held: left, right_held: right };
                state = step(&state, &input);
                prop_assert!(state.player.pos.x >= 0.0);
                prop_assert!(state.player.pos.x <= GAME_WIDTH - PLAYER_SIZE);
            }
        }

        #[test]
        fn score_moves_by_at_most_one_per_tick(
            seed in any::<u64>(),
            keys in prop::collection::vec((any::<bool>(), any::<bool>()), 1..300),
        ) {
            let mut state = playing_state(seed);
            for (left, right) in keys {
                let input = InputState { left_held: left, right_held: right };
                let next = step(&state, &input);
                prop_assert!(next.score >= state.score);
                prop_assert!(next.score - state.score <= 1);
                state = next;
            }
        }

        #[test]
        fn camera_never_leaves_the_player_above_the_midline(
            seed in any::<u64>(),
            keys in prop::collection::vec((any::<bool>(), any::<bool>()), 1..300),
        ) {
            let mut state = playing_state(seed);
            for (left, right) in keys {
                let input = InputState { left_held: left, right_held: right };
                state = step(&state, &input);
                prop_assert!(state.player.pos.y >= GAME_HEIGHT / 2.0 - 1e-3);
            }
        }

        #[test]
        fn exactly_one_ground_platform_forever(
            seed in any::<u64>(),
            keys in prop::collection::vec((any::<bool>(), any::<bool>()), 1..400),
        ) {
            let mut state = playing_state(seed);
            for (left, right) in keys {
                let input = InputState { left_held: left, right_held: right };
                state = step(&state, &input);
                let grounds = state.platforms.iter().filter(|p| p.is_ground).count();
                prop_assert_eq!(grounds, 1);
            }
        }

        #[test]
        fn used_platforms_never_reactivate(
            seed in any::<u64>(),
            keys in prop::collection::vec((any::<bool>(), any::<bool>()), 1..300),
        ) {
            let mut state = playing_state(seed);
            for (left, right) in keys {
                let input = InputState { left_held: left, right_held: right };
                // Scroll only moves y, so x identifies a platform across
                // the tick (random f32 placements never collide in practice).
                let inactive_before: Vec<f32> = state
                    .platforms
                    .iter()
                    .filter(|p| !p.active && !p.is_ground)
                    .map(|p| p.x)
                    .collect();
                state = step(&state, &input);
                for platform in state.platforms.iter().filter(|p| !p.is_ground) {
                    if inactive_before.contains(&platform.x) {
                        prop_assert!(!platform.active);
                    }
                }
            }
        }
    }
}
