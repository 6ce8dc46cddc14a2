//! White points in a virtual space one unit across, kept square on resize.

use anyhow::Result;
use glbi_engine::coords::{OrthoBounds, Vec2, Viewport};
use glbi_engine::core::{App, AppControl, FrameCtx};
use glbi_engine::paint::Color;
use glbi_engine::scene::SetOfPoints;
use glbi_engine::window::{LogicalSize, RuntimeConfig};

use crate::common::{Stage, CLEAR_COLOR};

/// Visible extent of virtual space along the shorter window side.
pub const VIEW_SIZE: f32 = 1.0;
pub const POINT_SIZE: f32 = 4.0;

const EXTRA_POINTS: [Vec2; 3] = [Vec2::new(0.5, 0.0), Vec2::new(0.0, 0.5), Vec2::new(-0.5, -0.5)];

pub fn config() -> RuntimeConfig {
    RuntimeConfig {
        title: "TD 02 Ex 01.1.1".to_string(),
        initial_size: LogicalSize::new(800.0, 800.0),
        ..RuntimeConfig::default()
    }
}

pub struct WhitePoints {
    points: SetOfPoints,
    projection: OrthoBounds,
    stage: Stage,
}

impl WhitePoints {
    pub fn new() -> Result<Self> {
        let mut points = SetOfPoints::new();
        points.init_uniform(&[0.0, 0.0], Color::white())?;
        for p in EXTRA_POINTS {
            points.add_point(p, Color::white());
        }

        Ok(Self {
            points,
            projection: OrthoBounds::for_aspect(VIEW_SIZE, 1.0),
            stage: Stage::new(),
        })
    }

    pub fn projection(&self) -> OrthoBounds {
        self.projection
    }

    pub fn points(&self) -> &SetOfPoints {
        &self.points
    }
}

impl App for WhitePoints {
    fn on_resize(&mut self, width: f32, height: f32) {
        if let Some(bounds) = OrthoBounds::for_viewport(VIEW_SIZE, Viewport::new(width, height)) {
            self.projection = bounds;
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let painter = self.stage.begin();
        painter.set_projection(self.projection);
        painter.set_point_size(POINT_SIZE);
        painter.draw_set(&self.points);
        self.stage.present(ctx, CLEAR_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_four_white_points() {
        let app = WhitePoints::new().expect("valid scene");
        assert_eq!(app.points().len(), 4);
        assert!(app.points().points().iter().all(|p| p.color == Color::white()));
    }

    #[test]
    fn resize_widens_the_long_axis() {
        let mut app = WhitePoints::new().expect("valid scene");
        app.on_resize(1600.0, 800.0);
        assert_eq!(app.projection(), OrthoBounds::new(-1.0, 1.0, -0.5, 0.5));

        app.on_resize(400.0, 800.0);
        assert_eq!(app.projection(), OrthoBounds::new(-0.5, 0.5, -1.0, 1.0));
    }

    #[test]
    fn minimized_window_keeps_previous_bounds() {
        let mut app = WhitePoints::new().expect("valid scene");
        app.on_resize(1600.0, 800.0);
        app.on_resize(1600.0, 0.0);
        assert_eq!(app.projection(), OrthoBounds::new(-1.0, 1.0, -0.5, 0.5));
    }
}
