//! Platform abstraction layer
//!
//! Thin adapters between a host (browser, window, headless runner) and the
//! simulation:
//! - Input events to edge-detected `InputState`
//! - Canvas fitting and level-to-canvas scaling
//! - Frame driver with a fixed-timestep accumulator

pub mod driver;
pub mod input;
pub mod viewport;

pub use driver::{FrameReport, Game};
pub use input::{InputTracker, Key, TouchButton};
pub use viewport::Viewport;
