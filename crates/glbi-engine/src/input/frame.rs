use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton};

/// Input gathered since the previous frame.
///
/// `InputState` provides what is held right now; `InputFrame` provides what
/// happened in between, in arrival order. Exercises apply these pending
/// changes at the top of each frame, before drawing.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed since the last frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released since the last frame.
    pub keys_released: HashSet<Key>,

    /// Mouse buttons pressed since the last frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released since the last frame.
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
