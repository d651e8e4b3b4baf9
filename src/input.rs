use crate::config::{KEY_REPEAT_DELAY, KEY_REPEAT_INTERVAL};
use crate::debug_input;
use crate::types::{Direction, InputEvent};
use macroquad::prelude::{
    KeyCode, MouseButton, get_frame_time, is_key_down, is_key_pressed, is_mouse_button_released,
    is_quit_requested,
};

/// Turns a held key into a stream of presses: one immediately, then one every
/// `KEY_REPEAT_INTERVAL` after an initial `KEY_REPEAT_DELAY`. At most one press per
/// tick; repeats missed during a long frame are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyRepeat {
    held_for: Option<f32>,
    next_repeat: f32,
}

impl KeyRepeat {
    /// Advance by `dt` seconds; returns true if the key produced a press
    pub fn tick(&mut self, down: bool, dt: f32) -> bool {
        if !down {
            self.held_for = None;
            return false;
        }

        let Some(elapsed) = self.held_for else {
            self.held_for = Some(0.0);
            self.next_repeat = KEY_REPEAT_DELAY;
            return true;
        };

        let elapsed = elapsed + dt;
        self.held_for = Some(elapsed);
        if elapsed < self.next_repeat {
            return false;
        }

        self.next_repeat += KEY_REPEAT_INTERVAL;
        if self.next_repeat <= elapsed {
            self.next_repeat = elapsed + KEY_REPEAT_INTERVAL;
        }
        true
    }
}

struct Binding {
    key: KeyCode,
    direction: Direction,
    repeat: KeyRepeat,
}

impl Binding {
    fn new(key: KeyCode, direction: Direction) -> Self {
        Binding {
            key,
            direction,
            repeat: KeyRepeat::default(),
        }
    }
}

/// Polls keyboard, mouse and window events once per frame
pub struct InputPoller {
    bindings: Vec<Binding>,
}

impl InputPoller {
    pub fn new() -> Self {
        let bindings = vec![
            Binding::new(KeyCode::Up, Direction::Up),
            Binding::new(KeyCode::W, Direction::Up),
            Binding::new(KeyCode::Down, Direction::Down),
            Binding::new(KeyCode::S, Direction::Down),
            Binding::new(KeyCode::Left, Direction::Left),
            Binding::new(KeyCode::A, Direction::Left),
            Binding::new(KeyCode::Right, Direction::Right),
            Binding::new(KeyCode::D, Direction::Right),
        ];
        InputPoller { bindings }
    }

    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            events.push(InputEvent::Quit);
        }

        let dt = get_frame_time();
        for binding in self.bindings.iter_mut() {
            if binding.repeat.tick(is_key_down(binding.key), dt) {
                events.push(InputEvent::Move(binding.direction));
            }
        }

        if is_mouse_button_released(MouseButton::Left) {
            events.push(InputEvent::Fire);
        }

        if !events.is_empty() {
            debug_input!("Polled {:?}", events);
        }
        events
    }
}

impl Default for InputPoller {
    fn default() -> Self {
        Self::new()
    }
}
