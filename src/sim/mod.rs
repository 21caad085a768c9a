//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical tick per call
//! - Stable iteration order (level authoring order)
//! - Wall-clock time only enters through explicit `now_ms` arguments
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;
pub mod timer;
pub mod view;

pub use collision::{Aabb, intersects};
pub use level::{
    Door, Enemy, EnemyKind, KeyItem, Level, LevelError, Obstacle, ObstacleKind, PowerUp,
    PowerUpKind, builtin_levels, load_levels,
};
pub use state::{EnemyState, GamePhase, LevelState, Player, World, WorldError};
pub use tick::{InputState, StepResult, tick};
pub use timer::EffectTimer;
pub use view::{Hud, Sprite, SpriteKind, hud, sprites};
