//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, carried inside the snapshot
//! - Stable platform order (spawn order, bottom to top)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod platform;
pub mod session;
pub mod state;
pub mod tick;

pub use input::InputState;
pub use platform::{generate_platform, horizontal_gap, platform_width};
pub use state::{GamePhase, GameState, Platform, Player};
pub use tick::step;
