//! Key Quest - A side-scrolling key-and-door platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `platform`: Input mapping, canvas fitting and the frame driver
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use platform::{Game, Key, Viewport};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical tick rate (physics constants are tuned per tick at this rate)
    pub const SIM_HZ: f64 = 60.0;
    /// Fixed simulation timestep in milliseconds
    pub const SIM_DT_MS: f64 = 1000.0 / SIM_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will try to catch up on
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Level view dimensions in level units (canvas scaling happens in `platform`)
    pub const LEVEL_VIEW_WIDTH: f32 = 800.0;
    pub const LEVEL_VIEW_HEIGHT: f32 = 400.0;
}
