//! Keyboard and touch input
//!
//! Hosts forward raw key/touch events; the tracker turns them into the
//! per-tick `InputState`. Jump is edge-triggered: one press queues one jump,
//! auto-repeat while held is ignored and releasing drops an unused press.

use crate::sim::InputState;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    Restart,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Jump),
            "r" | "R" => Some(Key::Restart),
            _ => None,
        }
    }
}

/// On-screen touch controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    Left,
    Right,
    Jump,
}

impl From<TouchButton> for Key {
    fn from(button: TouchButton) -> Self {
        match button {
            TouchButton::Left => Key::Left,
            TouchButton::Right => Key::Right,
            TouchButton::Jump => Key::Jump,
        }
    }
}

/// Accumulates host input events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    state: InputState,
    jump_held: bool,
    restart: bool,
}

impl InputTracker {
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.state.move_left = true,
            Key::Right => self.state.move_right = true,
            Key::Jump => {
                if !self.jump_held {
                    self.state.jump = true;
                }
                self.jump_held = true;
            }
            Key::Restart => self.restart = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.state.move_left = false,
            Key::Right => self.state.move_right = false,
            Key::Jump => {
                self.jump_held = false;
                self.state.jump = false;
            }
            Key::Restart => {}
        }
    }

    pub fn touch_start(&mut self, button: TouchButton) {
        self.key_down(button.into());
    }

    pub fn touch_end(&mut self, button: TouchButton) {
        self.key_up(button.into());
    }

    /// A tap anywhere (counts as restart on the game over screen)
    pub fn tap(&mut self) {
        self.restart = true;
    }

    /// Input handed to the next tick; the tick clears `jump` when it uses it
    pub fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    /// Consume a pending restart request
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart)
    }

    /// Release everything (e.g. after a reset or focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_jump_queues_single_press() {
        let mut tracker = InputTracker::default();
        tracker.key_down(Key::Jump);
        assert!(tracker.state().jump);

        // Tick consumes it
        tracker.state_mut().jump = false;

        // Auto-repeat while held
        tracker.key_down(Key::Jump);
        tracker.key_down(Key::Jump);
        assert!(!tracker.state().jump);

        tracker.key_up(Key::Jump);
        tracker.key_down(Key::Jump);
        assert!(tracker.state().jump);
    }

    #[test]
    fn test_release_drops_unused_jump() {
        let mut tracker = InputTracker::default();
        tracker.key_down(Key::Jump);
        tracker.key_up(Key::Jump);
        assert!(!tracker.state().jump);
    }

    #[test]
    fn test_touch_buttons_map_to_keys() {
        let mut tracker = InputTracker::default();
        tracker.touch_start(TouchButton::Right);
        tracker.touch_start(TouchButton::Left);
        assert!(tracker.state().move_right);
        assert!(tracker.state().move_left);
        tracker.touch_end(TouchButton::Right);
        assert!(!tracker.state().move_right);
    }

    #[test]
    fn test_restart_is_taken_once() {
        let mut tracker = InputTracker::default();
        assert!(!tracker.take_restart());
        tracker.tap();
        assert!(tracker.take_restart());
        assert!(!tracker.take_restart());
        tracker.key_down(Key::Restart);
        assert!(tracker.take_restart());
    }

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom_key(" "), Some(Key::Jump));
        assert_eq!(Key::from_dom_key("R"), Some(Key::Restart));
        assert_eq!(Key::from_dom_key("x"), None);
    }
}
