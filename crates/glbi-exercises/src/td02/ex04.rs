//! Shape cycling: a filled square, triangle or circle over the click canvas.

use anyhow::Result;
use glbi_engine::coords::OrthoBounds;
use glbi_engine::core::{App, AppControl, FrameCtx};
use glbi_engine::input::Key;
use glbi_engine::paint::Color;
use glbi_engine::scene::{ConvexShape, ShapeNature};
use glbi_engine::window::RuntimeConfig;

use super::ex03::ClickCanvas;
use crate::common::{sample_points, Stage, CLEAR_COLOR};

pub const VIEW_SIZE: f32 = 4.0;
pub const POINT_SIZE: f32 = 10.0;
pub const CIRCLE_RADIUS: f32 = 0.5;
pub const CIRCLE_SEGMENTS: usize = 36;

pub fn config() -> RuntimeConfig {
    RuntimeConfig { title: "TD 02 Ex 04".to_string(), ..RuntimeConfig::default() }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ShapeKind {
    #[default]
    Square,
    Triangle,
    Circle,
}

impl ShapeKind {
    pub fn next(self) -> Self {
        match self {
            ShapeKind::Square => ShapeKind::Triangle,
            ShapeKind::Triangle => ShapeKind::Circle,
            ShapeKind::Circle => ShapeKind::Square,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle => "circle",
        }
    }

    pub fn color(self) -> Color {
        match self {
            ShapeKind::Square => Color::rgb(1.0, 0.0, 0.0),
            ShapeKind::Triangle => Color::rgb(1.0, 1.0, 0.0),
            ShapeKind::Circle => Color::rgb(0.0, 1.0, 0.0),
        }
    }
}

pub struct ShapeCycle {
    canvas: ClickCanvas,
    /// Indexed by `ShapeKind as usize`.
    shapes: [ConvexShape; 3],
    current: ShapeKind,
    aspect: f32,
    stage: Stage,
}

impl ShapeCycle {
    pub fn new() -> Result<Self> {
        Ok(Self {
            canvas: ClickCanvas::new(sample_points()?),
            shapes: [
                ConvexShape::unit_square(),
                ConvexShape::unit_triangle(),
                ConvexShape::regular_polygon(CIRCLE_RADIUS, CIRCLE_SEGMENTS),
            ]
            .map(|shape| shape.with_nature(ShapeNature::Filled)),
            current: ShapeKind::default(),
            aspect: 1.0,
            stage: Stage::new(),
        })
    }

    pub fn current(&self) -> ShapeKind {
        self.current
    }

    pub fn on_key(&mut self, key: Key) {
        if key == Key::Space {
            self.current = self.current.next();
            log::info!("current shape: {}", self.current.label());
        }
    }

    pub fn shape(&self, kind: ShapeKind) -> &ConvexShape {
        &self.shapes[kind as usize]
    }
}

impl App for ShapeCycle {
    fn on_resize(&mut self, width: f32, height: f32) {
        self.canvas.resize(width, height);
        self.aspect = width / height;
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for ev in &ctx.input_frame.events {
            if let Some((key, _)) = ev.key_pressed() {
                self.on_key(key);
            }
        }
        self.canvas.apply_clicks(ctx);

        let painter = self.stage.begin();
        painter.set_projection(OrthoBounds::for_aspect(VIEW_SIZE, self.aspect));
        painter.set_point_size(POINT_SIZE);
        painter.draw_set(&self.canvas.points);

        painter.set_flat_color(self.current.color());
        painter.draw_shape(&self.shapes[self.current as usize]);

        self.stage.present(ctx, CLEAR_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_cycles_through_three_shapes() {
        let mut app = ShapeCycle::new().expect("valid scene");
        assert_eq!(app.current(), ShapeKind::Square);
        app.on_key(Key::Space);
        assert_eq!(app.current(), ShapeKind::Triangle);
        app.on_key(Key::Space);
        assert_eq!(app.current(), ShapeKind::Circle);
        app.on_key(Key::Space);
        assert_eq!(app.current(), ShapeKind::Square);
    }

    #[test]
    fn other_keys_keep_the_shape() {
        let mut app = ShapeCycle::new().expect("valid scene");
        app.on_key(Key::Enter);
        assert_eq!(app.current(), ShapeKind::Square);
    }

    #[test]
    fn shapes_are_filled_and_sized() {
        let app = ShapeCycle::new().expect("valid scene");
        for kind in [ShapeKind::Square, ShapeKind::Triangle, ShapeKind::Circle] {
            assert_eq!(app.shape(kind).nature(), ShapeNature::Filled);
        }
        assert_eq!(app.shape(ShapeKind::Circle).vertices().len(), CIRCLE_SEGMENTS);
        assert_eq!(app.shape(ShapeKind::Triangle).vertices().len(), 3);
    }
}
