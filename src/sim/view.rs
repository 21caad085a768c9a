//! Read-only render snapshot
//!
//! Presentation never reads `World` internals directly; it asks for the
//! sprites to draw this frame and the HUD values.

use super::collision::Aabb;
use super::level::{EnemyKind, PowerUpKind};
use super::state::World;

/// What a sprite represents (presentation picks colors from this)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Platform,
    Obstacle,
    Player { powered: bool },
    Enemy(EnemyKind),
    PowerUp(PowerUpKind),
    Key,
    Door,
}

/// A rectangle to draw, in screen space (level units, scroll applied)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Aabb,
}

/// Sprites for the active level in draw order; consumed pickups are omitted
pub fn sprites(world: &World) -> Vec<Sprite> {
    let level = world.level();
    let state = world.level_state();
    let dx = -world.scroll_offset;
    let mut out = Vec::with_capacity(
        level.platforms.len()
            + level.obstacles.len()
            + level.enemies.len()
            + level.power_ups.len()
            + level.keys.len()
            + 2,
    );

    out.extend(level.platforms.iter().map(|p| Sprite {
        kind: SpriteKind::Platform,
        rect: p.shifted_x(dx),
    }));
    out.extend(level.obstacles.iter().map(|o| Sprite {
        kind: SpriteKind::Obstacle,
        rect: o.rect.shifted_x(dx),
    }));
    out.push(Sprite {
        kind: SpriteKind::Player {
            powered: world.player.power_up.is_some(),
        },
        rect: world.player.bounds(),
    });
    out.extend(level.enemies.iter().zip(&state.enemies).map(|(e, s)| Sprite {
        kind: SpriteKind::Enemy(e.kind),
        rect: e.rect.with_x(s.x + dx),
    }));
    out.extend(
        level
            .power_ups
            .iter()
            .zip(&state.power_ups_active)
            .filter(|(_, active)| **active)
            .map(|(p, _)| Sprite {
                kind: SpriteKind::PowerUp(p.kind),
                rect: p.rect.shifted_x(dx),
            }),
    );
    out.extend(
        level
            .keys
            .iter()
            .zip(&state.keys_active)
            .filter(|(_, active)| **active)
            .map(|(k, _)| Sprite {
                kind: SpriteKind::Key,
                rect: k.rect.shifted_x(dx),
            }),
    );
    if let Some(door) = &level.door {
        out.push(Sprite {
            kind: SpriteKind::Door,
            rect: door.rect.shifted_x(dx),
        });
    }
    out
}

/// HUD values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub health: u8,
    pub keys: u32,
    pub power_up: Option<PowerUpKind>,
    pub level: usize,
    pub game_over: bool,
}

impl Hud {
    pub fn text(&self) -> String {
        format!("Health: {} Keys: {}", self.health, self.keys)
    }
}

pub fn hud(world: &World) -> Hud {
    Hud {
        health: world.player.health,
        keys: world.player.keys,
        power_up: world.player.power_up,
        level: world.current_level(),
        game_over: world.is_game_over(),
    }
}
