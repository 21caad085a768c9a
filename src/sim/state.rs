//! Game state and core simulation types
//!
//! `World` owns everything a tick reads or writes: the immutable level
//! templates, one `LevelState` per template, the player and the phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::Aabb;
use super::level::{self, Level, LevelError, PowerUpKind};
use super::timer::EffectTimer;
use crate::tuning::{Tuning, TuningError};

/// World could not be built from the given data
#[derive(Debug, Error)]
pub enum WorldError {
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Tuning(#[from] TuningError),
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Health ran out; only a reset leaves this phase
    GameOver,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in screen space (level x minus scroll offset)
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub vel_y: f32,
    pub jumping: bool,
    pub power_up: Option<PowerUpKind>,
    pub keys: u32,
    pub health: u8,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.spawn,
            size: tuning.player_size,
            speed: tuning.base_speed,
            vel_y: 0.0,
            jumping: false,
            power_up: None,
            keys: 0,
            health: tuning.start_health,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Runtime state of one enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyState {
    /// Level-space x (patrol position)
    pub x: f32,
    pub health: Option<u8>,
}

/// Mutable half of a level, parallel to its template's sequences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelState {
    pub enemies: Vec<EnemyState>,
    pub power_ups_active: Vec<bool>,
    pub keys_active: Vec<bool>,
}

impl LevelState {
    pub fn from_template(level: &Level) -> Self {
        Self {
            enemies: level
                .enemies
                .iter()
                .map(|e| EnemyState {
                    x: e.rect.x,
                    health: e.health,
                })
                .collect(),
            power_ups_active: vec![true; level.power_ups.len()],
            keys_active: vec![true; level.keys.len()],
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct World {
    pub tuning: Tuning,
    pub(crate) levels: Vec<Level>,
    /// One entry per level, never shared between levels
    pub(crate) level_states: Vec<LevelState>,
    /// Always a valid index into `levels`
    pub(crate) current_level: usize,
    /// Horizontal camera offset applied to all level geometry
    pub scroll_offset: f32,
    pub phase: GamePhase,
    pub player: Player,
    /// Pending power-up expiry
    pub power_up_timer: EffectTimer,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Create a world over a validated level set and tuning
    pub fn new(levels: Vec<Level>, tuning: Tuning) -> Result<Self, WorldError> {
        level::validate(&levels)?;
        tuning.validate()?;
        let level_states = levels.iter().map(LevelState::from_template).collect();
        Ok(Self {
            player: Player::new(&tuning),
            tuning,
            levels,
            level_states,
            current_level: 0,
            scroll_offset: 0.0,
            phase: GamePhase::Playing,
            power_up_timer: EffectTimer::default(),
            time_ticks: 0,
        })
    }

    /// World over the bundled levels
    pub fn with_builtin_levels(tuning: Tuning) -> Result<Self, WorldError> {
        Self::new(level::builtin_levels()?, tuning)
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Template of the active level
    pub fn level(&self) -> &Level {
        &self.levels[self.current_level]
    }

    /// Runtime state of the active level
    pub fn level_state(&self) -> &LevelState {
        &self.level_states[self.current_level]
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Expire the active power-up once its wall-clock deadline has passed.
    /// Returns true if an effect ended.
    pub fn expire_effects(&mut self, now_ms: f64) -> bool {
        if !self.power_up_timer.poll(now_ms) {
            return false;
        }
        log::debug!("Power-up {:?} expired", self.player.power_up);
        self.player.power_up = None;
        self.player.speed = self.tuning.base_speed;
        true
    }

    /// Restart from the first level with a fresh player and every pickup restored
    pub fn reset(&mut self) {
        self.player = Player::new(&self.tuning);
        self.scroll_offset = 0.0;
        self.current_level = 0;
        self.level_states = self.levels.iter().map(LevelState::from_template).collect();
        self.power_up_timer.cancel();
        self.phase = GamePhase::Playing;
        log::info!("Game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{Door, Enemy, EnemyKind, KeyItem, PowerUp};

    fn two_levels() -> Vec<Level> {
        let first = Level {
            enemies: vec![Enemy {
                rect: Aabb::new(600.0, 350.0, 30.0, 30.0),
                speed: 2.0,
                kind: EnemyKind::Basic,
                health: None,
            }],
            power_ups: vec![PowerUp {
                rect: Aabb::new(250.0, 270.0, 20.0, 20.0),
                kind: PowerUpKind::Speed,
            }],
            keys: vec![KeyItem {
                rect: Aabb::new(450.0, 190.0, 15.0, 15.0),
            }],
            door: Some(Door {
                rect: Aabb::new(700.0, 350.0, 30.0, 30.0),
                next_level: 1,
            }),
            ..Default::default()
        };
        let second = Level {
            power_ups: vec![PowerUp {
                rect: Aabb::new(550.0, 170.0, 20.0, 20.0),
                kind: PowerUpKind::Jump,
            }],
            ..Default::default()
        };
        vec![first, second]
    }

    #[test]
    fn test_new_world_defaults() {
        let world = World::new(two_levels(), Tuning::default()).unwrap();
        assert_eq!(world.current_level(), 0);
        assert_eq!(world.scroll_offset, 0.0);
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.player.pos, Vec2::new(50.0, 300.0));
        assert_eq!(world.player.size, Vec2::new(30.0, 30.0));
        assert_eq!(world.player.health, 3);
        assert_eq!(world.level_states.len(), 2);
        assert_eq!(world.level_state().enemies[0].x, 600.0);
        assert!(world.level_state().power_ups_active.iter().all(|&a| a));
    }

    #[test]
    fn test_new_world_rejects_empty_levels() {
        assert!(matches!(
            World::new(Vec::new(), Tuning::default()),
            Err(WorldError::Level(LevelError::Empty))
        ));
    }

    #[test]
    fn test_new_world_rejects_bad_tuning() {
        let no_health = Tuning {
            start_health: 0,
            ..Default::default()
        };
        assert!(matches!(
            World::new(two_levels(), no_health),
            Err(WorldError::Tuning(TuningError::NoHealth))
        ));

        let runaway = Tuning {
            friction: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            World::new(two_levels(), runaway),
            Err(WorldError::Tuning(TuningError::Friction(_)))
        ));
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut world = World::new(two_levels(), Tuning::default()).unwrap();
        world.player.pos = Vec2::new(400.0, 120.0);
        world.player.health = 0;
        world.player.keys = 2;
        world.player.speed = 8.0;
        world.player.power_up = Some(PowerUpKind::Speed);
        world.scroll_offset = 250.0;
        world.current_level = 1;
        world.phase = GamePhase::GameOver;
        world.power_up_timer.schedule(0.0, 5000.0);
        for state in &mut world.level_states {
            state.power_ups_active.iter_mut().for_each(|a| *a = false);
            state.keys_active.iter_mut().for_each(|a| *a = false);
            state.enemies.iter_mut().for_each(|e| e.x = -10.0);
        }

        world.reset();

        assert_eq!(world.player.pos, Vec2::new(50.0, 300.0));
        assert_eq!(world.player.health, 3);
        assert_eq!(world.player.keys, 0);
        assert_eq!(world.player.power_up, None);
        assert_eq!(world.player.speed, 5.0);
        assert_eq!(world.scroll_offset, 0.0);
        assert_eq!(world.current_level(), 0);
        assert_eq!(world.phase, GamePhase::Playing);
        assert!(!world.power_up_timer.is_armed());
        for state in &world.level_states {
            assert!(state.power_ups_active.iter().all(|&a| a));
            assert!(state.keys_active.iter().all(|&a| a));
        }
        assert_eq!(world.level_states[0].enemies[0].x, 600.0);
    }

    #[test]
    fn test_expire_effects_reverts_speed() {
        let mut world = World::new(two_levels(), Tuning::default()).unwrap();
        world.player.speed = 8.0;
        world.player.power_up = Some(PowerUpKind::Speed);
        world.power_up_timer.schedule(0.0, 5000.0);

        assert!(!world.expire_effects(4999.0));
        assert_eq!(world.player.speed, 8.0);
        assert!(world.expire_effects(5000.0));
        assert_eq!(world.player.speed, 5.0);
        assert_eq!(world.player.power_up, None);
    }
}
