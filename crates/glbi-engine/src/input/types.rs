use std::fmt;

/// Keyboard key identifier.
///
/// Physical keys are mapped by position (a QWERTY `Q` is `Key::Q` whatever the
/// layout). Keys without a variant come through as `Key::Unknown` carrying the
/// platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers as keys, left and right merged.
    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false, meta: false };

    pub const SHIFT: Modifiers = Modifiers { shift: true, ..Modifiers::NONE };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Mouse wheel delta.
///
/// `Line` is "scroll lines" style input; `Pixel` is high precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

/// Pointer move event in logical pixels (origin top-left).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event, with the pointer position at the time of the press.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// Platform code when available.
        code: u32,
        /// True when the event is an auto-repeat.
        repeat: bool,
    },

    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    MouseWheel {
        delta: MouseWheelDelta,
        modifiers: Modifiers,
    },

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// The key of a fresh (non-repeat) key press.
    pub fn key_pressed(&self) -> Option<(Key, Modifiers)> {
        match self {
            InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat: false, .. } => {
                Some((*key, *modifiers))
            }
            _ => None,
        }
    }

    /// Position of a button press, for `button`.
    pub fn button_pressed(&self, button: MouseButton) -> Option<(f32, f32)> {
        match self {
            InputEvent::PointerButton(PointerButtonEvent {
                button: b,
                state: MouseButtonState::Pressed,
                x,
                y,
                ..
            }) if *b == button => Some((*x, *y)),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::NONE, code: 0, repeat }
    }

    #[test]
    fn key_pressed_ignores_repeats_and_releases() {
        assert_eq!(
            key(Key::Space, KeyState::Pressed, false).key_pressed(),
            Some((Key::Space, Modifiers::NONE))
        );
        assert_eq!(key(Key::Space, KeyState::Pressed, true).key_pressed(), None);
        assert_eq!(key(Key::Space, KeyState::Released, false).key_pressed(), None);
    }

    #[test]
    fn button_pressed_filters_by_button() {
        let ev = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 10.0,
            y: 20.0,
            modifiers: Modifiers::NONE,
        });
        assert_eq!(ev.button_pressed(MouseButton::Left), Some((10.0, 20.0)));
        assert_eq!(ev.button_pressed(MouseButton::Right), None);
    }
}
