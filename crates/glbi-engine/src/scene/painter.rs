use crate::coords::{OrthoBounds, Vec2};
use crate::paint::Color;
use crate::transform::{Transform2D, TransformStack};

use super::cmd::ColoredPoint;
use super::list::DrawList;
use super::points::{PointNature, SetOfPoints};
use super::shape::{ConvexShape, ShapeNature};

/// Per-frame recording surface.
///
/// Holds the drawing state a fixed-function pipeline would: projection, flat
/// color, point size and the model transform stack. Geometry is transformed
/// on the CPU when recorded, so the resulting [`DrawList`] is in virtual space.
#[derive(Debug)]
pub struct Painter {
    draw_list: DrawList,
    transforms: TransformStack,
    flat_color: Color,
    point_size: f32,
}

impl Painter {
    pub fn new() -> Self {
        Self {
            draw_list: DrawList::new(),
            transforms: TransformStack::new(),
            flat_color: Color::white(),
            point_size: 1.0,
        }
    }

    /// Starts a new frame: drops last frame's commands and resets the
    /// transform stack. Projection, flat color and point size carry over.
    pub fn begin_frame(&mut self) {
        self.draw_list.clear();
        self.transforms.reset();
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn set_projection(&mut self, projection: OrthoBounds) {
        self.draw_list.set_projection(projection);
    }

    #[inline]
    pub fn projection(&self) -> OrthoBounds {
        self.draw_list.projection()
    }

    #[inline]
    pub fn set_flat_color(&mut self, color: Color) {
        self.flat_color = color;
    }

    #[inline]
    pub fn flat_color(&self) -> Color {
        self.flat_color
    }

    /// Point side length in framebuffer pixels.
    #[inline]
    pub fn set_point_size(&mut self, size: f32) {
        self.point_size = size.max(0.0);
    }

    #[inline]
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[inline]
    pub fn transform(&self) -> Transform2D {
        self.transforms.current()
    }

    pub fn set_identity(&mut self) {
        self.transforms.set_identity();
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.transforms.translate(x, y);
    }

    /// Counter-clockwise rotation in radians.
    pub fn rotate(&mut self, radians: f32) {
        self.transforms.rotate(radians);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.transforms.scale(sx, sy);
    }

    pub fn push(&mut self) {
        self.transforms.push();
    }

    pub fn pop(&mut self) {
        self.transforms.pop();
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Draws a point set with its per-point colors.
    pub fn draw_set(&mut self, set: &SetOfPoints) {
        let m = self.transforms.current();
        let points: Vec<ColoredPoint> = set
            .points()
            .iter()
            .map(|p| ColoredPoint::new(m.apply(p.pos), p.color))
            .collect();

        match set.nature() {
            PointNature::Points => self.draw_list.push_points(points, self.point_size),
            PointNature::LineStrip => self.draw_list.push_lines(points, false),
        }
    }

    /// Draws a convex shape in the current flat color.
    pub fn draw_shape(&mut self, shape: &ConvexShape) {
        let m = self.transforms.current();
        let vertices: Vec<Vec2> = shape.vertices().iter().map(|&v| m.apply(v)).collect();

        match shape.nature() {
            ShapeNature::Filled => self.draw_list.push_polygon(vertices, self.flat_color),
            ShapeNature::Outline => {
                let color = self.flat_color;
                let points = vertices
                    .into_iter()
                    .map(|pos| ColoredPoint::new(pos, color))
                    .collect();
                self.draw_list.push_lines(points, true);
            }
        }
    }

    /// Draws a filled quad given in the current model space.
    pub fn draw_quad(&mut self, corners: [Vec2; 4], color: Color) {
        let m = self.transforms.current();
        let vertices = corners.iter().map(|&v| m.apply(v)).collect();
        self.draw_list.push_polygon(vertices, color);
    }

    /// Draws a filled axis-aligned rectangle spanning `min`..`max` in model space.
    pub fn fill_rect(&mut self, min: Vec2, max: Vec2, color: Color) {
        self.draw_quad(
            [
                Vec2::new(min.x, min.y),
                Vec2::new(max.x, min.y),
                Vec2::new(max.x, max.y),
                Vec2::new(min.x, max.y),
            ],
            color,
        );
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn shape_vertices_are_transformed_on_record() {
        let mut p = Painter::new();
        let square = ConvexShape::unit_square().with_nature(ShapeNature::Filled);
        p.translate(1.0, 0.0);
        p.scale(2.0, 2.0);
        p.set_flat_color(Color::rgb(1.0, 0.0, 0.0));
        p.draw_shape(&square);

        let DrawCmd::Polygon(cmd) = &p.draw_list().items()[0] else {
            panic!("expected a polygon");
        };
        assert!(approx(cmd.vertices[0], Vec2::new(0.0, -1.0)));
        assert!(approx(cmd.vertices[2], Vec2::new(2.0, 1.0)));
        assert_eq!(cmd.color, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn outline_shape_records_closed_lines_in_flat_color() {
        let mut p = Painter::new();
        p.set_flat_color(Color::rgb(0.0, 1.0, 0.0));
        p.draw_shape(&ConvexShape::unit_triangle());

        let DrawCmd::Lines(cmd) = &p.draw_list().items()[0] else {
            panic!("expected lines");
        };
        assert!(cmd.closed);
        assert_eq!(cmd.points.len(), 3);
        assert!(cmd.points.iter().all(|pt| pt.color == Color::rgb(0.0, 1.0, 0.0)));
    }

    #[test]
    fn point_set_nature_selects_command() {
        let mut set = SetOfPoints::new();
        set.init_uniform(&[0.0, 0.0, 0.5, 0.5], Color::white()).unwrap();

        let mut p = Painter::new();
        p.set_point_size(10.0);
        p.draw_set(&set);
        set.toggle_nature();
        p.draw_set(&set);

        let items = p.draw_list().items();
        assert!(matches!(&items[0], DrawCmd::Points(c) if c.size == 10.0));
        assert!(matches!(&items[1], DrawCmd::Lines(c) if !c.closed));
    }

    #[test]
    fn begin_frame_clears_commands_and_transforms() {
        let mut p = Painter::new();
        p.set_projection(OrthoBounds::centered(3.0, 3.0));
        p.push();
        p.translate(4.0, 4.0);
        p.fill_rect(Vec2::zero(), Vec2::new(1.0, 1.0), Color::black());
        p.begin_frame();

        assert!(p.draw_list().is_empty());
        assert_eq!(p.transform(), Transform2D::IDENTITY);
        assert_eq!(p.projection(), OrthoBounds::centered(3.0, 3.0));
    }
}
