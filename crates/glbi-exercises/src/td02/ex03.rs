//! The sample points, plus a white point wherever the window is clicked.

use anyhow::Result;
use glbi_engine::coords::{screen_to_virtual, Vec2};
use glbi_engine::core::{App, AppControl, FrameCtx};
use glbi_engine::input::MouseButton;
use glbi_engine::paint::Color;
use glbi_engine::scene::SetOfPoints;
use glbi_engine::window::RuntimeConfig;

use crate::common::{sample_points, Stage, CLEAR_COLOR};

pub const POINT_SIZE: f32 = 10.0;

pub fn config() -> RuntimeConfig {
    RuntimeConfig { title: "TD 02 Ex 03".to_string(), ..RuntimeConfig::default() }
}

/// Click-to-add behavior shared with the shape exercise.
#[derive(Debug, Clone)]
pub struct ClickCanvas {
    pub points: SetOfPoints,
    size: (f32, f32),
}

impl ClickCanvas {
    pub fn new(points: SetOfPoints) -> Self {
        Self { points, size: (0.0, 0.0) }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = (width, height);
        log::info!("window resized: {width}x{height}, aspect ratio = {}", width / height);
    }

    /// Adds a white point at the mapped click position. Returns where it
    /// landed, or `None` before the window size is known.
    pub fn click(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let (width, height) = self.size;
        let pos = screen_to_virtual(x, y, width, height)?;

        log::info!("click at screen ({x}, {y}) -> virtual ({}, {})", pos.x, pos.y);
        self.points.add_point(pos, Color::white());
        Some(pos)
    }

    /// Applies every left click recorded since the last frame.
    pub fn apply_clicks(&mut self, ctx: &FrameCtx<'_, '_>) {
        for ev in &ctx.input_frame.events {
            if let Some((x, y)) = ev.button_pressed(MouseButton::Left) {
                self.click(x, y);
            }
        }
    }
}

pub struct ClickPoints {
    canvas: ClickCanvas,
    stage: Stage,
}

impl ClickPoints {
    pub fn new() -> Result<Self> {
        Ok(Self { canvas: ClickCanvas::new(sample_points()?), stage: Stage::new() })
    }
}

impl App for ClickPoints {
    fn on_resize(&mut self, width: f32, height: f32) {
        self.canvas.resize(width, height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.canvas.apply_clicks(ctx);

        let painter = self.stage.begin();
        painter.set_point_size(POINT_SIZE);
        painter.draw_set(&self.canvas.points);
        self.stage.present(ctx, CLEAR_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_before_first_resize_is_ignored() {
        let mut canvas = ClickCanvas::new(SetOfPoints::new());
        assert_eq!(canvas.click(10.0, 10.0), None);
        assert!(canvas.points.is_empty());
    }

    #[test]
    fn center_click_adds_origin_point() {
        let mut canvas = ClickCanvas::new(sample_points().expect("valid scene"));
        canvas.resize(1024.0, 720.0);

        assert_eq!(canvas.click(512.0, 360.0), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(canvas.points.len(), 5);
        assert_eq!(canvas.points.points()[4].color, Color::white());
    }

    #[test]
    fn landscape_click_stretches_x_by_aspect() {
        let mut canvas = ClickCanvas::new(SetOfPoints::new());
        canvas.resize(800.0, 400.0);

        let pos = canvas.click(800.0, 0.0).expect("size known");
        assert!((pos.x - 2.0).abs() < 1e-6);
        assert!((pos.y - 1.0).abs() < 1e-6);
    }
}
