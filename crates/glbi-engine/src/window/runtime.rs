use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::translate::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::{FrameClock, FramePacer, DEFAULT_FRAME_INTERVAL};

/// How the window occupies the screen.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum WindowMode {
    #[default]
    Windowed,
    /// Fullscreen on the current monitor without a video mode change.
    BorderlessFullscreen,
}

impl WindowMode {
    pub fn toggled(self) -> Self {
        match self {
            WindowMode::Windowed => WindowMode::BorderlessFullscreen,
            WindowMode::BorderlessFullscreen => WindowMode::Windowed,
        }
    }

    fn fullscreen(self) -> Option<Fullscreen> {
        match self {
            WindowMode::Windowed => None,
            WindowMode::BorderlessFullscreen => Some(Fullscreen::Borderless(None)),
        }
    }
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Minimum time between the starts of two frames.
    pub frame_interval: Duration,
    pub window_mode: WindowMode,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "glbi".to_string(),
            initial_size: LogicalSize::new(1024.0, 720.0),
            frame_interval: DEFAULT_FRAME_INTERVAL,
            window_mode: WindowMode::Windowed,
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn close_window(&mut self, id: WindowId) {
        self.commands.push(Command::CloseWindow(id));
    }

    pub fn set_window_mode(&mut self, id: WindowId, mode: WindowMode) {
        self.commands.push(Command::SetWindowMode(id, mode));
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    CloseWindow(WindowId),
    SetWindowMode(WindowId, WindowMode),
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the configured window and drives `app` until the window closes
    /// or the app asks to exit.
    ///
    /// Fails if the event loop, the window, or the GPU context cannot be
    /// created. Runtime surface errors are handled per frame and never
    /// surface here.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.init_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    pacer: FramePacer,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    windows: HashMap<WindowId, WindowEntry>,
    exit_requested: bool,

    /// First initialization failure, returned from `Runtime::run`.
    init_error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            windows: HashMap::new(),
            exit_requested: false,
            init_error: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowId> {
        let config = &self.config;
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size)
            .with_fullscreen(config.window_mode.fullscreen());

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let id = window.id();
        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            pacer: FramePacer::new(config.frame_interval),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()?;

        log::info!(
            "runtime: window \"{}\" {}x{} at {:.1} fps",
            config.title,
            config.initial_size.width,
            config.initial_size.height,
            1.0 / config.frame_interval.as_secs_f64()
        );

        // The app sees the initial size the same way as later resizes.
        let (w, h) = entry.with_window(|w| logical_size(w));
        if w > 0.0 && h > 0.0 {
            self.app.on_resize(w, h);
        }

        self.windows.insert(id, entry);
        Ok(id)
    }

    fn destroy_window_entry(&mut self, id: WindowId) {
        self.windows.remove(&id);
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, mut ctx: RuntimeCtx) {
        for cmd in ctx.take() {
            match cmd {
                Command::CloseWindow(id) => self.destroy_window_entry(id),
                Command::SetWindowMode(id, mode) => {
                    if let Some(entry) = self.windows.get(&id) {
                        log::info!("runtime: window mode {mode:?}");
                        entry.with_window(|w| w.set_fullscreen(mode.fullscreen()));
                    }
                }
                Command::Exit => self.request_exit(),
            }
        }

        if self.windows.is_empty() {
            self.request_exit();
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    /// Runs one paced frame for `window_id`, if its interval has elapsed.
    fn redraw(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        let mut runtime_ctx = RuntimeCtx::default();
        let mut app_control = AppControl::Continue;

        let (app, windows) = (&mut self.app, &mut self.windows);
        let Some(entry) = windows.get_mut(&window_id) else {
            return;
        };

        entry.with_mut(|fields| {
            let now = Instant::now();
            // Platform-initiated redraws (expose, resize) may arrive early.
            if !fields.pacer.try_begin(now) {
                return;
            }
            let time = fields.clock.tick_at(now);

            {
                let mut ctx = FrameCtx {
                    window: WindowCtx { id: window_id, window: fields.window },
                    gpu: fields.gpu,
                    input: fields.input_state,
                    input_frame: fields.input_frame,
                    time,
                    runtime: &mut runtime_ctx,
                };

                app_control = app.on_frame(&mut ctx);
            }

            // Pending input has been consumed by this frame.
            fields.input_frame.clear();
        });

        if app_control == AppControl::Exit {
            runtime_ctx.exit();
        }

        self.apply_commands(event_loop, runtime_ctx);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.windows.is_empty() || self.exit_requested {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(id) => {
                if let Some(entry) = self.windows.get(&id) {
                    entry.with_window(|w| w.request_redraw());
                }
            }
            Err(e) => {
                log::error!("failed to create initial window: {e:#}");
                self.init_error = Some(e);
                self.request_exit();
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Due windows get a redraw; the loop then sleeps until the earliest
        // pending deadline, waking early only for input.
        let now = Instant::now();
        let mut next_deadline: Option<Instant> = None;

        for entry in self.windows.values() {
            let (due, deadline) = entry.with_pacer(|p| (p.is_due(now), p.deadline()));
            if due {
                entry.with_window(|w| w.request_redraw());
            } else if let Some(deadline) = deadline {
                next_deadline = Some(next_deadline.map_or(deadline, |d| d.min(deadline)));
            }
        }

        event_loop.set_control_flow(match next_deadline {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, windows) = (&mut self.app, &mut self.windows);

        let Some(entry) = windows.get_mut(&window_id) else {
            return;
        };

        let mut exit_from_app_event = false;

        entry.with_mut(|fields| {
            if let Some(ev) = translate_window_event(fields.window, fields.input_state, &event) {
                fields.input_state.apply_event(fields.input_frame, ev);
            }

            if app.on_window_event(window_id, &event) == AppControl::Exit {
                exit_from_app_event = true;
            }
        });

        if exit_from_app_event {
            self.request_exit();
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.destroy_window_entry(window_id);
                if self.windows.is_empty() {
                    self.request_exit();
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(new_size) => {
                let (app, windows) = (&mut self.app, &mut self.windows);
                if let Some(entry) = windows.get_mut(&window_id) {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));

                    let (w, h) = entry.with_window(|w| logical_size(w));
                    if w > 0.0 && h > 0.0 {
                        log::debug!("runtime: resized to {w}x{h}");
                        app.on_resize(w, h);
                    }
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.windows.get_mut(&window_id) {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop, window_id),

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}

fn logical_size(window: &Window) -> (f32, f32) {
    let logical: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
    (logical.width as f32, logical.height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_mode_toggle_round_trips() {
        let mode = WindowMode::default();
        assert_eq!(mode, WindowMode::Windowed);
        assert_eq!(mode.toggled(), WindowMode::BorderlessFullscreen);
        assert_eq!(mode.toggled().toggled(), mode);
    }

    #[test]
    fn borderless_maps_to_current_monitor() {
        assert!(WindowMode::Windowed.fullscreen().is_none());
        assert!(matches!(
            WindowMode::BorderlessFullscreen.fullscreen(),
            Some(Fullscreen::Borderless(None))
        ));
    }

    #[test]
    fn commands_are_buffered_in_order() {
        let mut ctx = RuntimeCtx::default();
        ctx.exit();
        ctx.exit();
        assert_eq!(ctx.take(), vec![Command::Exit, Command::Exit]);
        assert!(ctx.take().is_empty());
    }

    #[test]
    fn close_window_targets_its_window() {
        let id = WindowId::dummy();
        let mut ctx = RuntimeCtx::default();
        ctx.set_window_mode(id, WindowMode::BorderlessFullscreen);
        ctx.close_window(id);
        assert_eq!(
            ctx.take(),
            vec![
                Command::SetWindowMode(id, WindowMode::BorderlessFullscreen),
                Command::CloseWindow(id),
            ]
        );
    }

    #[test]
    fn default_config_paces_at_thirty_fps() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.frame_interval, DEFAULT_FRAME_INTERVAL);
        assert_eq!(cfg.window_mode, WindowMode::Windowed);
    }
}
