//! Landing detection
//!
//! A platform is a landing candidate iff the player's bottom edge sits
//! inside the platform's vertical band, the horizontal extents overlap, the
//! player is moving downward (or stationary), and the platform is still
//! active. Upward motion never lands, so the player passes cleanly through
//! platforms while ascending.

use glam::Vec2;

use crate::consts::{PLATFORM_HEIGHT, PLAYER_SIZE};

use super::state::Platform;

/// True when the player's horizontal extent overlaps the platform's.
#[inline]
pub fn horizontal_overlap(player_x: f32, platform: &Platform) -> bool {
    player_x < platform.right() && player_x + PLAYER_SIZE > platform.x
}

/// True when the player's bottom edge lies within the platform's band.
#[inline]
pub fn in_vertical_band(player_pos: Vec2, platform: &Platform) -> bool {
    let bottom = player_pos.y + PLAYER_SIZE;
    bottom >= platform.y && bottom <= platform.y + PLATFORM_HEIGHT
}

/// Full landing-candidate predicate.
pub fn is_landing(player_pos: Vec2, vy: f32, platform: &Platform) -> bool {
    platform.active
        && vy >= 0.0
        && in_vertical_band(player_pos, platform)
        && horizontal_overlap(player_pos.x, platform)
}
