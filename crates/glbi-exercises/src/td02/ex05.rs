//! Transform composition: a cat head built from one disc and one triangle.

use std::f32::consts::{FRAC_PI_3, FRAC_PI_4, PI};

use glbi_engine::coords::{OrthoBounds, Vec2};
use glbi_engine::core::{App, AppControl, FrameCtx};
use glbi_engine::paint::Color;
use glbi_engine::scene::{ConvexShape, Painter, ShapeNature};
use glbi_engine::window::RuntimeConfig;

use crate::common::{Stage, CLEAR_COLOR};

pub const VIEW_SIZE: f32 = 6.0;

pub const FUR: Color = Color::rgb(0.8, 0.5, 0.2);
pub const EAR: Color = Color::rgb(0.7, 0.4, 0.1);

/// Ears sit on the head's rim, half a unit from its center.
const EAR_DISTANCE: f32 = 0.5;
const EAR_SCALE: f32 = 0.5;
const EYE_SCALE: f32 = 0.15;
const EYES: [Vec2; 2] = [Vec2::new(-0.2, 0.1), Vec2::new(0.2, 0.1)];

pub fn config() -> RuntimeConfig {
    RuntimeConfig { title: "TD 02 Ex 05".to_string(), ..RuntimeConfig::default() }
}

/// The shapes and view of the drawing, apart from the GPU side.
#[derive(Debug, Clone)]
pub struct CatDrawing {
    disc: ConvexShape,
    triangle: ConvexShape,
    aspect: f32,
}

impl CatDrawing {
    pub fn new() -> Self {
        Self {
            disc: ConvexShape::regular_polygon(0.5, 36).with_nature(ShapeNature::Filled),
            triangle: ConvexShape::unit_triangle().with_nature(ShapeNature::Filled),
            aspect: 1.0,
        }
    }

    /// Records the whole drawing. Each part starts again from identity.
    pub fn draw(&self, painter: &mut Painter) {
        painter.set_projection(OrthoBounds::for_aspect(VIEW_SIZE, self.aspect));

        painter.set_identity();
        painter.set_flat_color(FUR);
        painter.draw_shape(&self.disc);

        // Same disc moved one unit right.
        painter.set_identity();
        painter.translate(1.0, 0.0);
        painter.draw_shape(&self.disc);

        painter.set_identity();
        painter.draw_shape(&self.disc);

        painter.set_flat_color(EAR);
        for (angle, tilt) in [(FRAC_PI_4, FRAC_PI_3), (PI - FRAC_PI_4, -FRAC_PI_3)] {
            let rim = Vec2::from_polar(EAR_DISTANCE, angle);
            painter.set_identity();
            painter.translate(rim.x, rim.y);
            painter.rotate(tilt);
            painter.scale(EAR_SCALE, EAR_SCALE);
            painter.draw_shape(&self.triangle);
        }

        painter.set_flat_color(Color::black());
        for eye in EYES {
            painter.set_identity();
            painter.translate(eye.x, eye.y);
            painter.scale(EYE_SCALE, EYE_SCALE);
            painter.draw_shape(&self.disc);
        }

        painter.set_identity();
    }
}

impl Default for CatDrawing {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct CatHead {
    drawing: CatDrawing,
    stage: Stage,
}

impl CatHead {
    pub fn new() -> Self {
        Self::default()
    }
}

impl App for CatHead {
    fn on_resize(&mut self, width: f32, height: f32) {
        self.drawing.aspect = width / height;
        log::info!("window resized: {width}x{height}, aspect ratio = {}", self.drawing.aspect);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.drawing.draw(self.stage.begin());
        self.stage.present(ctx, CLEAR_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use glbi_engine::scene::DrawCmd;

    use super::*;

    fn record() -> Painter {
        let mut painter = Painter::new();
        CatDrawing::new().draw(&mut painter);
        painter
    }

    fn polygons(painter: &Painter) -> Vec<(Vec<Vec2>, Color)> {
        painter
            .draw_list()
            .items()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Polygon(p) => Some((p.vertices.clone(), p.color)),
                _ => None,
            })
            .collect()
    }

    fn centroid(vertices: &[Vec2]) -> Vec2 {
        let sum = vertices.iter().fold(Vec2::zero(), |acc, &v| acc + v);
        sum / vertices.len() as f32
    }

    #[test]
    fn records_three_heads_two_ears_two_eyes() {
        let painter = record();
        let polys = polygons(&painter);
        assert_eq!(polys.len(), 7);

        let colors: Vec<Color> = polys.iter().map(|(_, c)| *c).collect();
        assert_eq!(&colors[..3], &[FUR; 3]);
        assert_eq!(&colors[3..5], &[EAR; 2]);
        assert_eq!(&colors[5..], &[Color::black(); 2]);
    }

    #[test]
    fn second_disc_is_shifted_right() {
        let polys = polygons(&record());
        let c = centroid(&polys[1].0);
        assert!((c.x - 1.0).abs() < 1e-5);
        assert!(c.y.abs() < 1e-5);
    }

    #[test]
    fn eyes_are_scaled_down_discs() {
        let polys = polygons(&record());
        let (eye, _) = &polys[5];
        let c = centroid(eye);
        assert!((c.x + 0.2).abs() < 1e-5 && (c.y - 0.1).abs() < 1e-5);
        // Radius 0.5 scaled by 0.15.
        assert!(((eye[0] - c).length() - 0.075).abs() < 1e-5);
    }

    #[test]
    fn ears_mirror_each_other() {
        let polys = polygons(&record());
        let right = centroid(&polys[3].0);
        let left = centroid(&polys[4].0);
        assert!((right.x + left.x).abs() < 1e-5);
        assert!((right.y - left.y).abs() < 1e-5);
        assert!(right.x > 0.0);
    }
}
