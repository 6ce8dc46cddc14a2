use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the exercises.
///
/// Call order for one window: `on_resize` once with the initial size, then
/// per paced frame `on_frame`. Resizes between frames are reported through
/// `on_resize` before the next `on_frame`.
pub trait App {
    /// Called for raw window events, before input translation.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called when the drawable size changes, in logical pixels.
    ///
    /// Zero-sized (minimized) windows are not reported.
    fn on_resize(&mut self, width: f32, height: f32) {
        let _ = (width, height);
    }

    /// Called once per paced frame per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
