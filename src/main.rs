//! Key Quest entry point
//!
//! Native builds run a headless autoplay session: a scripted player runs
//! right and hops at intervals, and every notable event is logged. Browser
//! hosts drive `key_quest::Game` from their own frame callback instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use key_quest::consts::SIM_DT_MS;
    use key_quest::sim::World;
    use key_quest::{Game, Key, Tuning};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Key Quest (native autoplay) starting...");

    let tuning = match std::env::var("KEY_QUEST_TUNING") {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Ignoring KEY_QUEST_TUNING: {}", e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let world = match World::with_builtin_levels(tuning) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Game data rejected: {}", e);
            std::process::exit(1);
        }
    };

    let mut game = Game::new(world);
    game.resize(1280.0, 720.0);
    game.key_down(Key::Right);

    let frames: u32 = std::env::var("KEY_QUEST_FRAMES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1800);
    let mut restarts = 0;

    for frame in 0..frames {
        let now = frame as f64 * SIM_DT_MS;

        // Hop every 40 frames
        if frame % 40 == 0 {
            game.key_down(Key::Jump);
        } else if frame % 40 == 5 {
            game.key_up(Key::Jump);
        }

        let report = game.frame(now);
        let hud = game.hud();
        if report.step.damaged {
            log::info!("Frame {}: hit! {}", frame, hud.text());
        }
        if let Some(kind) = report.step.power_up_collected {
            log::info!("Frame {}: picked up {:?}", frame, kind);
        }
        if report.step.keys_collected > 0 {
            log::info!("Frame {}: key collected, {}", frame, hud.text());
        }
        if report.step.leveled {
            log::info!("Frame {}: through the door to level {}", frame, hud.level);
        }
        if report.effect_expired {
            log::info!("Frame {}: power-up wore off", frame);
        }
        if report.step.game_over_triggered {
            log::info!("Frame {}: GAME OVER on level {}", frame, hud.level);
            if restarts >= 2 {
                break;
            }
            restarts += 1;
            game.tap();
        }
        if report.restarted {
            game.key_down(Key::Right);
        }
    }

    let hud = game.hud();
    log::info!(
        "Autoplay finished: level {}, {}, {} sprites on screen, {} ticks simulated",
        hud.level,
        hud.text(),
        game.sprites().len(),
        game.world().time_ticks
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM hosts drive `key_quest::Game` directly
}
