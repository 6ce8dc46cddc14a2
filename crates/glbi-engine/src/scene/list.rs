use crate::coords::{OrthoBounds, Vec2};
use crate::paint::Color;

use super::cmd::{ColoredPoint, DrawCmd, LinesCmd, PointsCmd, PolygonCmd};

/// Recorded draw stream for a frame.
///
/// Paint order is record order. The projection is a property of the whole
/// frame: the last value set before rendering wins.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    projection: OrthoBounds,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity and the projection.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn projection(&self) -> OrthoBounds {
        self.projection
    }

    #[inline]
    pub fn set_projection(&mut self, projection: OrthoBounds) {
        self.projection = projection;
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records square points. Empty input records nothing.
    pub fn push_points(&mut self, points: Vec<ColoredPoint>, size: f32) {
        if points.is_empty() || size <= 0.0 {
            return;
        }
        self.push(DrawCmd::Points(PointsCmd { points, size }));
    }

    /// Records a line strip (or loop when `closed`). Fewer than two points
    /// record nothing.
    pub fn push_lines(&mut self, points: Vec<ColoredPoint>, closed: bool) {
        if points.len() < 2 {
            return;
        }
        self.push(DrawCmd::Lines(LinesCmd { points, closed }));
    }

    /// Records a filled convex polygon. Fewer than three vertices record nothing.
    pub fn push_polygon(&mut self, vertices: Vec<Vec2>, color: Color) {
        if vertices.len() < 3 {
            return;
        }
        self.push(DrawCmd::Polygon(PolygonCmd { vertices, color }));
    }
}
