//! Procedural platform generation
//!
//! Width and horizontal spread are pure functions of score; only the
//! placement inside the band draws from the injected RNG. Difficulty moves
//! in discrete steps (every `difficulty_interval` points) so players feel
//! the curve instead of a continuous drift.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::MID;
use crate::tuning::Tuning;

use super::state::Platform;

/// Platform width for the given score: shrinks 10% of the base width per
/// difficulty step, floored at the minimum width.
pub fn platform_width(score: u32, tuning: &Tuning) -> f32 {
    let shrink = 1.0 - tuning.difficulty_step(score) as f32 * 0.1;
    (tuning.base_platform_width * shrink.max(0.0)).max(tuning.min_platform_width)
}

/// Half-spread of the placement band for the given score: grows 20 px per
/// difficulty step, capped at the maximum gap.
pub fn horizontal_gap(score: u32, tuning: &Tuning) -> f32 {
    (tuning.min_gap + tuning.difficulty_step(score) as f32 * 20.0).min(tuning.max_gap)
}

/// Place one platform at the given y, scaled against the current score.
///
/// The x position is uniform over a band of total width `2 * gap` offset
/// left of the midline by `width + gap`. The band may poke past either
/// viewport edge; only horizontal overlap with the player matters for
/// collision, not full visibility.
pub fn generate_platform(rng: &mut Pcg32, y: f32, score: u32, tuning: &Tuning) -> Platform {
    let width = platform_width(score, tuning);
    let gap = horizontal_gap(score, tuning);
    let base_x = MID - width - gap;
    let x = base_x + rng.random_range(0.0..gap * 2.0);
    Platform {
        x,
        y,
        width,
        active: true,
        is_ground: false,
    }
}
