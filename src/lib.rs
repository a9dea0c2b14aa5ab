//! Dino Jump - an endless-jumper arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, platform
//!   generation, session lifecycle)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use sim::{GamePhase, GameState, InputState, step};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewport dimensions in pixels. Positive y points down, so "falling"
    /// increases y and the world floor sits at GAME_HEIGHT.
    pub const GAME_WIDTH: f32 = 400.0;
    pub const GAME_HEIGHT: f32 = 600.0;
    /// Horizontal midline, the center of the platform placement band
    pub const MID: f32 = GAME_WIDTH / 2.0;

    /// Player sprite is a square of this side length
    pub const PLAYER_SIZE: f32 = 60.0;
    /// Every platform shares one height
    pub const PLATFORM_HEIGHT: f32 = 50.0;
}
