//! Held-key input state
//!
//! Key down/up events mutate this tracker immediately; the next tick reads
//! whatever is current, so input latency is bounded by one tick interval.
//! The confirm key is an edge event and goes straight to the session
//! lifecycle, not through here.

use serde::{Deserialize, Serialize};

/// Which direction keys are currently held.
///
/// Repeated key-down events while held are idempotent no-ops; there is no
/// debouncing to do on plain booleans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left_held: bool,
    pub right_held: bool,
}

impl InputState {
    pub fn press_left(&mut self) {
        self.left_held = true;
    }

    pub fn release_left(&mut self) {
        self.left_held = false;
    }

    pub fn press_right(&mut self) {
        self.right_held = true;
    }

    pub fn release_right(&mut self) {
        self.right_held = false;
    }
}
