use crate::coords::Vec2;
use crate::paint::Color;

/// A position with its own color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColoredPoint {
    pub pos: Vec2,
    pub color: Color,
}

impl ColoredPoint {
    #[inline]
    pub const fn new(pos: Vec2, color: Color) -> Self {
        Self { pos, color }
    }
}

/// Independent square points; `size` is the side length in framebuffer pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsCmd {
    pub points: Vec<ColoredPoint>,
    pub size: f32,
}

/// Connected segments through `points`. `closed` adds the segment from the
/// last point back to the first (a line loop).
#[derive(Debug, Clone, PartialEq)]
pub struct LinesCmd {
    pub points: Vec<ColoredPoint>,
    pub closed: bool,
}

/// Filled convex polygon with a single flat color.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub vertices: Vec<Vec2>,
    pub color: Color,
}

/// Renderer-agnostic draw command, positions already in virtual space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Points(PointsCmd),
    Lines(LinesCmd),
    Polygon(PolygonCmd),
}
