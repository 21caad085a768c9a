//! Frame driver
//!
//! Owns the world and the input tracker and is called once per host frame
//! (`requestAnimationFrame`, a window redraw, or a scripted loop). Real frame
//! time is converted into fixed 60 Hz ticks so the per-tick physics constants
//! behave the same at any refresh rate.

use crate::consts::{LEVEL_VIEW_WIDTH, MAX_FRAME_MS, MAX_SUBSTEPS, SIM_DT_MS};
use crate::sim::{self, Hud, Sprite, StepResult, World};

use super::input::{InputTracker, Key, TouchButton};
use super::viewport::Viewport;

/// Summary of one host frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Simulation ticks run this frame
    pub ticks: u32,
    /// Merged results of those ticks
    pub step: StepResult,
    /// A power-up ran out this frame
    pub effect_expired: bool,
    /// The game was restarted this frame
    pub restarted: bool,
}

/// Game instance holding all state
pub struct Game {
    world: World,
    input: InputTracker,
    viewport: Viewport,
    accumulator: f64,
    last_time: Option<f64>,
}

impl Game {
    pub fn new(world: World) -> Self {
        Self {
            world,
            input: InputTracker::default(),
            viewport: Viewport::default(),
            accumulator: 0.0,
            last_time: None,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Host window resized
    pub fn resize(&mut self, window_width: f32, window_height: f32) {
        self.viewport = Viewport::fit(window_width, window_height);
        log::debug!(
            "Canvas fitted to {}x{}",
            self.viewport.width,
            self.viewport.height
        );
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    pub fn touch_start(&mut self, button: TouchButton) {
        self.input.touch_start(button);
    }

    pub fn touch_end(&mut self, button: TouchButton) {
        self.input.touch_end(button);
    }

    pub fn tap(&mut self) {
        self.input.tap();
    }

    /// Window lost focus: release all held keys
    pub fn blur(&mut self) {
        self.input.clear();
    }

    /// Advance by one host frame at wall-clock time `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let mut report = FrameReport {
            effect_expired: self.world.expire_effects(now_ms),
            ..Default::default()
        };

        let dt = match self.last_time {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_time = Some(now_ms);

        if self.world.is_game_over() {
            if self.input.take_restart() {
                self.world.reset();
                self.input.clear();
                self.accumulator = 0.0;
                report.restarted = true;
            }
            return report;
        }
        // Restart only means something on the game over screen
        self.input.take_restart();

        self.accumulator += dt;
        while self.accumulator >= SIM_DT_MS && report.ticks < MAX_SUBSTEPS {
            let step = sim::tick(
                &mut self.world,
                self.input.state_mut(),
                LEVEL_VIEW_WIDTH,
                now_ms,
            );
            self.accumulator -= SIM_DT_MS;
            report.ticks += 1;
            report.step.merge(step);
            if self.world.is_game_over() {
                self.accumulator = 0.0;
                break;
            }
        }
        if self.accumulator >= SIM_DT_MS {
            log::warn!(
                "Dropping {:.1} ms of simulation backlog",
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        report
    }

    pub fn sprites(&self) -> Vec<Sprite> {
        sim::sprites(&self.world)
    }

    pub fn hud(&self) -> Hud {
        sim::hud(&self.world)
    }
}
