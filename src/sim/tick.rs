//! Simulation tick
//!
//! Advances the world by exactly one logical tick. Resolution order is fixed:
//! movement, jump, vertical physics, platforms, enemies, power-ups, keys,
//! door, obstacles. Later stages see the results of earlier ones.

use super::collision::intersects;
use super::level::{EnemyKind, PowerUpKind};
use super::state::{GamePhase, Player, World};
use crate::tuning::Tuning;

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    /// Pending jump press; cleared by the tick that starts the jump
    pub jump: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    /// Player touched an enemy or obstacle
    pub damaged: bool,
    /// Player went through a door
    pub leveled: bool,
    /// Health reached zero this tick
    pub game_over_triggered: bool,
    pub keys_collected: u32,
    pub power_up_collected: Option<PowerUpKind>,
}

impl StepResult {
    /// Fold another tick's result into this one (used by the frame driver)
    pub fn merge(&mut self, other: StepResult) {
        self.damaged |= other.damaged;
        self.leveled |= other.leveled;
        self.game_over_triggered |= other.game_over_triggered;
        self.keys_collected += other.keys_collected;
        if other.power_up_collected.is_some() {
            self.power_up_collected = other.power_up_collected;
        }
    }
}

/// Take one hit: lose a point of health and go back to spawn with the camera
/// rewound. Returns true if that was the last point.
fn damage_player(player: &mut Player, scroll_offset: &mut f32, tuning: &Tuning) -> bool {
    player.health = player.health.saturating_sub(1);
    player.pos = tuning.spawn;
    *scroll_offset = 0.0;
    player.health == 0
}

/// Advance the world by one tick.
///
/// `viewport_width` is the visible width in level units (camera-follow
/// threshold is half of it). `now_ms` is wall-clock time, used only to
/// schedule power-up expiry.
pub fn tick(
    world: &mut World,
    input: &mut InputState,
    viewport_width: f32,
    now_ms: f64,
) -> StepResult {
    let mut result = StepResult::default();

    // Game over waits for an external reset
    if world.phase == GamePhase::GameOver {
        return result;
    }

    world.time_ticks += 1;
    let level_index = world.current_level;
    let level = &world.levels[level_index];
    let tuning = &world.tuning;
    let player = &mut world.player;

    // Horizontal movement
    if input.move_right {
        player.pos.x += player.speed;
        if player.pos.x > viewport_width / 2.0 {
            world.scroll_offset += player.speed;
        }
    }
    if input.move_left && player.pos.x > tuning.left_bound {
        player.pos.x -= player.speed;
    }

    // Jump (edge-triggered)
    if input.jump && !player.jumping {
        let boosted = player.power_up == Some(PowerUpKind::Jump);
        player.vel_y = -tuning.jump_impulse_for(boosted);
        player.jumping = true;
        input.jump = false;
    }

    // Vertical physics
    player.vel_y += tuning.gravity;
    player.pos.y += player.vel_y;
    player.vel_y *= tuning.friction;

    // Platforms only catch a falling player. Landing zeroes vel_y, so the
    // first overlapping platform in authoring order wins.
    for platform in &level.platforms {
        let platform = platform.shifted_x(-world.scroll_offset);
        if intersects(&player.bounds(), &platform) && player.vel_y > 0.0 {
            player.pos.y = platform.y - player.size.y;
            player.vel_y = 0.0;
            player.jumping = false;
        }
    }

    let level_state = &mut world.level_states[level_index];

    // Enemies: patrol, then test the position they had at the start of the tick
    for (template, enemy) in level.enemies.iter().zip(level_state.enemies.iter_mut()) {
        let hitbox = template.rect.with_x(enemy.x - world.scroll_offset);
        if template.kind == EnemyKind::Basic {
            enemy.x -= template.speed;
            if enemy.x < -template.rect.width {
                enemy.x = tuning.enemy_respawn_x + world.scroll_offset;
            }
        }
        if intersects(&player.bounds(), &hitbox) {
            result.damaged = true;
            if damage_player(player, &mut world.scroll_offset, tuning) {
                result.game_over_triggered = true;
                world.phase = GamePhase::GameOver;
                log::info!("Game over (enemy) on level {}", level_index);
                return result;
            }
        }
    }

    // Power-ups
    let power_ups = level.power_ups.iter().zip(level_state.power_ups_active.iter_mut());
    for (power_up, active) in power_ups {
        if !*active {
            continue;
        }
        if intersects(&player.bounds(), &power_up.rect.shifted_x(-world.scroll_offset)) {
            *active = false;
            player.power_up = Some(power_up.kind);
            if power_up.kind == PowerUpKind::Speed {
                player.speed = tuning.boosted_speed;
            }
            world.power_up_timer.schedule(now_ms, tuning.power_up_duration_ms);
            result.power_up_collected = Some(power_up.kind);
            log::debug!("Collected {:?} power-up", power_up.kind);
        }
    }

    // Keys
    for (key, active) in level.keys.iter().zip(level_state.keys_active.iter_mut()) {
        if *active && intersects(&player.bounds(), &key.rect.shifted_x(-world.scroll_offset)) {
            *active = false;
            player.keys += 1;
            result.keys_collected += 1;
            log::debug!("Collected key ({} held)", player.keys);
        }
    }

    // Door consumes exactly one key
    if let Some(door) = &level.door {
        let door_rect = door.rect.shifted_x(-world.scroll_offset);
        if player.keys > 0 && intersects(&player.bounds(), &door_rect) {
            world.current_level = door.next_level;
            player.pos = tuning.spawn;
            world.scroll_offset = 0.0;
            player.keys -= 1;
            result.leveled = true;
            log::info!("Entered level {} ({} keys left)", door.next_level, player.keys);
        }
    }

    // Obstacles (same penalty as enemies)
    for obstacle in &level.obstacles {
        let rect = obstacle.rect.shifted_x(-world.scroll_offset);
        if intersects(&player.bounds(), &rect) {
            result.damaged = true;
            if damage_player(player, &mut world.scroll_offset, tuning) {
                result.game_over_triggered = true;
                world.phase = GamePhase::GameOver;
                log::info!("Game over ({:?}) on level {}", obstacle.kind, level_index);
                return result;
            }
        }
    }

    result
}
