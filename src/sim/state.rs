//! Game state and core simulation types
//!
//! The whole world is one serializable snapshot; `step` replaces it
//! wholesale every tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start prompt
    NotStarted,
    /// Active gameplay, the fixed tick runs
    Playing,
    /// Life ended, final score and high score on display
    GameOver,
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in viewport pixels
    pub pos: Vec2,
    /// Vertical velocity in pixels per tick (positive is falling)
    pub vy: f32,
}

impl Player {
    /// Spawn position: centered horizontally, standing on the ground
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(
                GAME_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
                GAME_HEIGHT - PLAYER_SIZE - PLATFORM_HEIGHT,
            ),
            vy: 0.0,
        }
    }

    /// Bottom edge of the player sprite
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + PLAYER_SIZE
    }
}

/// A bounce platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    /// True until the first landing on this platform; a used platform
    /// neither bounces nor scores again
    pub active: bool,
    /// Marks the one permanent full-width floor platform
    pub is_ground: bool,
}

impl Platform {
    /// The permanent floor platform. Never active, so it never bounces or
    /// scores; the terminal check watches the floor line instead.
    pub fn ground() -> Self {
        Self {
            x: 0.0,
            y: GAME_HEIGHT - PLATFORM_HEIGHT,
            width: GAME_WIDTH,
            active: false,
            is_ground: true,
        }
    }

    /// Right edge of the platform
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Generator RNG; advances only when platforms are placed
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// The player character
    pub player: Player,
    /// Platforms in spawn order, bottom to top. The last element is the
    /// most recently appended (topmost) platform; collision tie-breaks
    /// follow this order, first match wins.
    pub platforms: Vec<Platform>,
    /// Score of the current life, +1 per first landing on a platform
    pub score: u32,
    /// Best finished score this process lifetime; committed only when a
    /// life ends
    pub high_score: u32,
    /// Balance knobs
    pub tuning: Tuning,
}

impl GameState {
    /// Create a fresh session with the given seed and default tuning.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a fresh session with explicit tuning.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            player: Player::spawn(),
            platforms: Vec::new(),
            score: 0,
            high_score: 0,
            tuning,
        };
        state.init();
        state
    }

    /// The most recently appended (topmost) platform.
    pub fn topmost(&self) -> Option<&Platform> {
        self.platforms.last()
    }
}
