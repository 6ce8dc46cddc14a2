//! Background color driven by the keyboard and the mouse.
//!
//! Nothing is drawn but the clear color. `R`/`G`/`B` held raise a channel
//! every frame, lowered instead while Shift is held. A left click sets red
//! and green from the raw click position.

use glbi_engine::core::{App, AppControl, FrameCtx};
use glbi_engine::input::{InputState, Key, MouseButton};
use glbi_engine::paint::{Channel, Color};
use glbi_engine::window::{LogicalSize, RuntimeConfig, WindowMode};

use crate::common::CLEAR_COLOR;

/// Per-frame change of a held channel.
pub const CHANNEL_STEP: f32 = 0.1;

const CHANNEL_KEYS: [(Key, Channel); 3] =
    [(Key::R, Channel::Red), (Key::G, Channel::Green), (Key::B, Channel::Blue)];

pub fn config() -> RuntimeConfig {
    RuntimeConfig {
        title: "TD 01 Ex 06".to_string(),
        initial_size: LogicalSize::new(800.0, 800.0),
        ..RuntimeConfig::default()
    }
}

/// What a key press asks of the runtime.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyOutcome {
    None,
    /// Closing the only window ends the program.
    CloseWindow,
    SetWindowMode(WindowMode),
}

pub struct BackgroundColor {
    color: Color,
    /// Channel keys only apply in manual mode.
    manual: bool,
    window_mode: WindowMode,
    size: (f32, f32),
}

impl BackgroundColor {
    pub fn new() -> Self {
        Self {
            color: CLEAR_COLOR,
            manual: true,
            window_mode: WindowMode::Windowed,
            size: (0.0, 0.0),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    pub fn on_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Q => KeyOutcome::CloseWindow,
            Key::M => {
                self.manual = !self.manual;
                log::info!("manual color mode {}", if self.manual { "on" } else { "off" });
                KeyOutcome::None
            }
            Key::F => {
                self.window_mode = self.window_mode.toggled();
                KeyOutcome::SetWindowMode(self.window_mode)
            }
            _ => KeyOutcome::None,
        }
    }

    /// Red from the column, green from the row counted from the bottom; both
    /// wrap every 256 pixels.
    pub fn on_click(&mut self, x: f32, y: f32) {
        let (_, height) = self.size;
        let column = (x as i32).rem_euclid(256);
        let row = ((height - y) as i32).rem_euclid(256);

        self.color.r = column as f32 / 255.0;
        self.color.g = row as f32 / 255.0;
        log::info!("click at ({x}, {y}): background {:?}", self.color);
    }

    /// Applies the held channel keys once.
    pub fn step(&mut self, input: &InputState) {
        if !self.manual {
            return;
        }
        let delta = if input.modifiers.shift || input.key_down(Key::Shift) {
            -CHANNEL_STEP
        } else {
            CHANNEL_STEP
        };
        for (key, channel) in CHANNEL_KEYS {
            if input.key_down(key) {
                self.color.step_channel(channel, delta);
            }
        }
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::new()
    }
}

impl App for BackgroundColor {
    fn on_resize(&mut self, width: f32, height: f32) {
        self.size = (width, height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for ev in &ctx.input_frame.events {
            if let Some((key, _)) = ev.key_pressed() {
                match self.on_key(key) {
                    KeyOutcome::CloseWindow => {
                        ctx.runtime.close_window(ctx.window.id);
                        return AppControl::Continue;
                    }
                    KeyOutcome::SetWindowMode(mode) => ctx.runtime.set_window_mode(ctx.window.id, mode),
                    KeyOutcome::None => {}
                }
            }
            if let Some((x, y)) = ev.button_pressed(MouseButton::Left) {
                self.on_click(x, y);
            }
        }

        self.step(ctx.input);
        ctx.render(self.color, |_, _| {})
    }
}

#[cfg(test)]
mod tests {
    use glbi_engine::input::{InputEvent, InputFrame, KeyState, Modifiers};

    use super::*;

    fn hold(keys: &[Key], modifiers: Modifiers) -> InputState {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for &key in keys {
            state.apply_event(
                &mut frame,
                InputEvent::Key { key, state: KeyState::Pressed, modifiers, code: 0, repeat: false },
            );
        }
        state
    }

    #[test]
    fn held_channel_rises_until_one() {
        let mut bg = BackgroundColor::new();
        let input = hold(&[Key::R], Modifiers::NONE);
        for _ in 0..20 {
            bg.step(&input);
        }
        assert_eq!(bg.color().r, 1.0);
        assert_eq!(bg.color().g, 0.0);
    }

    #[test]
    fn shift_lowers_and_stops_at_zero() {
        let mut bg = BackgroundColor::new();
        let input = hold(&[Key::Shift, Key::R], Modifiers::SHIFT);
        bg.step(&input);
        assert!((bg.color().r - 0.1).abs() < 1e-6);
        for _ in 0..5 {
            bg.step(&input);
        }
        assert_eq!(bg.color().r, 0.0);
    }

    #[test]
    fn manual_mode_gates_channel_keys() {
        let mut bg = BackgroundColor::new();
        assert!(bg.is_manual());
        assert_eq!(bg.on_key(Key::M), KeyOutcome::None);
        assert!(!bg.is_manual());

        bg.step(&hold(&[Key::G, Key::B], Modifiers::NONE));
        assert_eq!(bg.color(), CLEAR_COLOR);
    }

    #[test]
    fn click_sets_red_and_green_from_pixels() {
        let mut bg = BackgroundColor::new();
        bg.on_resize(800.0, 800.0);
        bg.on_click(255.0, 800.0 - 51.0);
        assert!((bg.color().r - 1.0).abs() < 1e-6);
        assert!((bg.color().g - 0.2).abs() < 1e-6);

        // 300 px wraps to 44.
        bg.on_click(300.0, 800.0);
        assert!((bg.color().r - 44.0 / 255.0).abs() < 1e-6);
        assert_eq!(bg.color().g, 0.0);
    }

    #[test]
    fn close_and_fullscreen_keys() {
        let mut bg = BackgroundColor::new();
        assert_eq!(bg.on_key(Key::Q), KeyOutcome::CloseWindow);
        assert_eq!(bg.on_key(Key::F), KeyOutcome::SetWindowMode(WindowMode::BorderlessFullscreen));
        assert_eq!(bg.on_key(Key::F), KeyOutcome::SetWindowMode(WindowMode::Windowed));
        assert_eq!(bg.on_key(Key::Z), KeyOutcome::None);
    }
}
