//! Session lifecycle
//!
//! NotStarted -> Playing -> GameOver, and back to NotStarted through
//! `init`. The GameOver transition itself lives in the tick's terminal
//! check; nothing leaves GameOver except `init`.

use crate::consts::*;

use super::platform::generate_platform;
use super::state::{GamePhase, GameState, Platform, Player};

impl GameState {
    /// Reset to NotStarted from any phase: respawn the player, zero the
    /// score, regenerate the platform field against score 0. The high
    /// score survives resets for the process lifetime.
    pub fn init(&mut self) {
        self.player = Player::spawn();
        self.score = 0;
        self.phase = GamePhase::NotStarted;

        self.platforms.clear();
        self.platforms.push(Platform::ground());
        let base_y = GAME_HEIGHT - PLATFORM_HEIGHT;
        for i in 0..self.tuning.initial_platforms {
            let y = base_y - (i as f32 + 1.0) * self.tuning.platform_spacing;
            let platform = generate_platform(&mut self.rng, y, 0, &self.tuning);
            self.platforms.push(platform);
        }

        log::debug!(
            "session reset: {} platforms, high score {}",
            self.platforms.len(),
            self.high_score
        );
    }

    /// Begin the life: the game opens mid-jump rather than static.
    /// Only meaningful from NotStarted.
    pub fn start(&mut self) {
        if self.phase != GamePhase::NotStarted {
            return;
        }
        self.player.vy = -self.tuning.jump_velocity;
        self.phase = GamePhase::Playing;
        log::info!("session started (seed {})", self.seed);
    }

    /// Edge-triggered confirm action (space bar, start/retry click).
    /// Starts a pending session, restarts a finished one, and is ignored
    /// mid-game.
    pub fn confirm(&mut self) {
        match self.phase {
            GamePhase::NotStarted => self.start(),
            GamePhase::Playing => {}
            GamePhase::GameOver => self.init(),
        }
    }
}
