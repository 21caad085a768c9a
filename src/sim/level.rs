//! Level templates
//!
//! Levels are authored data, bundled at build time and validated once when
//! loaded. Nothing in here changes during play; per-level runtime state
//! (enemy positions, consumed pickups) lives in `state::LevelState`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::Aabb;

/// Bundled level set
const BUILTIN_LEVELS: &str = include_str!("../../assets/levels.json");

/// Rejected level data
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level list is empty")]
    Empty,
    #[error("invalid level JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level {level}: {what} has a negative extent")]
    NegativeExtent { level: usize, what: &'static str },
    #[error("level {level}: door leads to level {next}, but only {count} levels exist")]
    DoorOutOfRange {
        level: usize,
        next: usize,
        count: usize,
    },
}

/// Enemy behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    /// Patrols leftward and wraps around
    Basic,
    /// Stationary
    Boss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    #[serde(flatten)]
    pub rect: Aabb,
    pub speed: f32,
    pub kind: EnemyKind,
    /// Reserved for combat; nothing decrements it yet
    #[serde(default)]
    pub health: Option<u8>,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUpKind {
    Speed,
    Jump,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    #[serde(flatten)]
    pub rect: Aabb,
    pub kind: PowerUpKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyItem {
    #[serde(flatten)]
    pub rect: Aabb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    #[serde(flatten)]
    pub rect: Aabb,
    pub next_level: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    #[default]
    Spike,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    #[serde(flatten)]
    pub rect: Aabb,
    #[serde(default)]
    pub kind: ObstacleKind,
}

/// Immutable description of one level (sequence order is resolution order)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    pub platforms: Vec<Aabb>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    pub keys: Vec<KeyItem>,
    pub door: Option<Door>,
    pub obstacles: Vec<Obstacle>,
}

impl Level {
    /// Every rectangle in the level, labelled for error reporting
    fn rects(&self) -> impl Iterator<Item = (&'static str, &Aabb)> {
        self.platforms
            .iter()
            .map(|r| ("platform", r))
            .chain(self.enemies.iter().map(|e| ("enemy", &e.rect)))
            .chain(self.power_ups.iter().map(|p| ("power-up", &p.rect)))
            .chain(self.keys.iter().map(|k| ("key", &k.rect)))
            .chain(self.door.iter().map(|d| ("door", &d.rect)))
            .chain(self.obstacles.iter().map(|o| ("obstacle", &o.rect)))
    }
}

/// Check a full level set before play starts
pub fn validate(levels: &[Level]) -> Result<(), LevelError> {
    if levels.is_empty() {
        return Err(LevelError::Empty);
    }
    for (index, level) in levels.iter().enumerate() {
        if let Some((what, _)) = level.rects().find(|(_, r)| !r.is_valid()) {
            return Err(LevelError::NegativeExtent { level: index, what });
        }
        if let Some(door) = &level.door {
            if door.next_level >= levels.len() {
                return Err(LevelError::DoorOutOfRange {
                    level: index,
                    next: door.next_level,
                    count: levels.len(),
                });
            }
        }
    }
    Ok(())
}

/// Parse and validate a level set
pub fn load_levels(json: &str) -> Result<Vec<Level>, LevelError> {
    let levels: Vec<Level> = serde_json::from_str(json)?;
    validate(&levels)?;
    log::info!("Loaded {} levels", levels.len());
    Ok(levels)
}

/// The level set shipped with the game
pub fn builtin_levels() -> Result<Vec<Level>, LevelError> {
    load_levels(BUILTIN_LEVELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_levels_load() {
        let levels = builtin_levels().unwrap();
        assert_eq!(levels.len(), 2);

        let first = &levels[0];
        assert_eq!(first.platforms.len(), 3);
        assert_eq!(first.enemies[0].kind, EnemyKind::Basic);
        assert_eq!(first.power_ups[0].kind, PowerUpKind::Speed);
        assert_eq!(first.keys.len(), 1);
        assert_eq!(first.door.as_ref().map(|d| d.next_level), Some(1));
        assert_eq!(first.obstacles[0].kind, ObstacleKind::Spike);

        let second = &levels[1];
        assert!(second.door.is_none());
        let boss = &second.enemies[1];
        assert_eq!(boss.kind, EnemyKind::Boss);
        assert_eq!(boss.speed, 0.0);
        assert_eq!(boss.health, Some(3));
        assert_eq!(second.enemies[0].health, None);
    }

    #[test]
    fn test_rejects_empty_level_list() {
        assert!(matches!(load_levels("[]"), Err(LevelError::Empty)));
    }

    #[test]
    fn test_rejects_door_past_last_level() {
        let json = r#"[{ "door": { "x": 0, "y": 0, "width": 10, "height": 10, "next_level": 1 } }]"#;
        assert!(matches!(
            load_levels(json),
            Err(LevelError::DoorOutOfRange {
                level: 0,
                next: 1,
                count: 1
            })
        ));
    }

    #[test]
    fn test_rejects_negative_extent() {
        let json = r#"[{ "platforms": [{ "x": 0, "y": 0, "width": -5, "height": 10 }] }]"#;
        assert!(matches!(
            load_levels(json),
            Err(LevelError::NegativeExtent {
                level: 0,
                what: "platform"
            })
        ));
    }

    #[test]
    fn test_door_may_loop_back() {
        let level = Level {
            door: Some(Door {
                rect: Aabb::new(0.0, 0.0, 10.0, 10.0),
                next_level: 0,
            }),
            ..Default::default()
        };
        assert!(validate(&[level]).is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(load_levels("[{"), Err(LevelError::Parse(_))));
    }
}
