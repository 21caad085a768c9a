//! Gameplay tuning
//!
//! Every constant the simulation reads at runtime. Defaults reproduce the
//! shipped feel; a JSON document may override any subset of them.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("friction must be in (0, 1), got {0}")]
    Friction(f32),
    #[error("`{name}` must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("starting health must be at least 1")]
    NoHealth,
}

/// Gameplay constants (per-tick units at `consts::SIM_HZ`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to velocity each tick
    pub gravity: f32,
    /// Per-tick vertical velocity damping (caps fall speed, not air drag)
    pub friction: f32,
    /// Jump impulse without a power-up
    pub jump_impulse: f32,
    /// Jump impulse while the jump power-up is active
    pub boosted_jump_impulse: f32,
    /// Horizontal speed without a power-up
    pub base_speed: f32,
    /// Horizontal speed while the speed power-up is active
    pub boosted_speed: f32,
    /// Power-up lifetime in wall-clock milliseconds
    pub power_up_duration_ms: f64,
    /// Player cannot walk left of this x
    pub left_bound: f32,
    /// Where the player appears on start, damage and level change
    pub spawn: Vec2,
    pub player_size: Vec2,
    pub start_health: u8,
    /// Level x a basic enemy wraps to (plus the scroll offset) after leaving on the left
    pub enemy_respawn_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            friction: 0.8,
            jump_impulse: 12.0,
            boosted_jump_impulse: 15.0,
            base_speed: 5.0,
            boosted_speed: 8.0,
            power_up_duration_ms: 5000.0,
            left_bound: 50.0,
            spawn: Vec2::new(50.0, 300.0),
            player_size: Vec2::new(30.0, 30.0),
            start_health: 3,
            enemy_respawn_x: crate::consts::LEVEL_VIEW_WIDTH,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(TuningError::Friction(self.friction));
        }
        let positives = [
            ("gravity", self.gravity as f64),
            ("jump_impulse", self.jump_impulse as f64),
            ("boosted_jump_impulse", self.boosted_jump_impulse as f64),
            ("base_speed", self.base_speed as f64),
            ("boosted_speed", self.boosted_speed as f64),
            ("power_up_duration_ms", self.power_up_duration_ms),
            ("player_size.x", self.player_size.x as f64),
            ("player_size.y", self.player_size.y as f64),
        ];
        for (name, value) in positives {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { name, value });
            }
        }
        if self.start_health == 0 {
            return Err(TuningError::NoHealth);
        }
        Ok(())
    }

    /// Jump impulse magnitude for the given power-up state
    pub fn jump_impulse_for(&self, jump_boost: bool) -> f32 {
        if jump_boost {
            self.boosted_jump_impulse
        } else {
            self.jump_impulse
        }
    }
}
