//! Data-driven game balance
//!
//! Every speed, impulse and difficulty knob the simulation consumes lives in
//! one serializable struct, so tests can probe the difficulty curve without
//! touching constants.

use serde::{Deserialize, Serialize};

/// Balance knobs consumed by the step function and the platform generator.
///
/// All speeds are in pixels per tick at the fixed 60 Hz timestep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration added to vy every tick
    pub gravity: f32,
    /// Upward impulse applied on every bounce (and on session start)
    pub jump_velocity: f32,
    /// Horizontal speed while a direction key is held
    pub move_speed: f32,
    /// Vertical distance between consecutive spawned platforms
    pub platform_spacing: f32,
    /// Platform width at score 0
    pub base_platform_width: f32,
    /// Width floor the difficulty curve cannot shrink past
    pub min_platform_width: f32,
    /// Half-spread of the placement band at score 0
    pub min_gap: f32,
    /// Cap on the half-spread as difficulty grows
    pub max_gap: f32,
    /// Points per difficulty step (width shrinks, band widens)
    pub difficulty_interval: u32,
    /// Non-ground platforms generated above the ground at init
    pub initial_platforms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_velocity: 16.0,
            move_speed: 6.0,
            platform_spacing: 160.0,
            base_platform_width: 80.0,
            min_platform_width: 40.0,
            min_gap: 50.0,
            max_gap: 130.0,
            difficulty_interval: 10,
            initial_platforms: 5,
        }
    }
}

impl Tuning {
    /// Number of completed difficulty steps at the given score.
    /// An interval of 0 would be a config bug; treat it as 1.
    pub fn difficulty_step(&self, score: u32) -> u32 {
        score / self.difficulty_interval.max(1)
    }
}
