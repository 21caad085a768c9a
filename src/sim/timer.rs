//! Wall-clock effect timer
//!
//! Power-ups expire after real elapsed time, not after a number of ticks, so
//! the timer is polled by the frame driver every frame (also at game over).
//! A single slot: scheduling again replaces the pending expiry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectTimer {
    /// Absolute expiry time in milliseconds, if armed
    expires_at_ms: Option<f64>,
}

impl EffectTimer {
    /// Arm the timer, replacing any pending expiry
    pub fn schedule(&mut self, now_ms: f64, duration_ms: f64) {
        self.expires_at_ms = Some(now_ms + duration_ms);
    }

    pub fn cancel(&mut self) {
        self.expires_at_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.expires_at_ms.is_some()
    }

    /// Returns true exactly once when the expiry time has been reached
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.expires_at_ms {
            Some(at) if now_ms >= at => {
                self.expires_at_ms = None;
                true
            }
            _ => false,
        }
    }
}
