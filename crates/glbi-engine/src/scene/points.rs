use crate::coords::Vec2;
use crate::paint::Color;

use super::cmd::ColoredPoint;
use super::error::SceneError;

/// How a point set is drawn.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PointNature {
    /// Independent square points.
    #[default]
    Points,
    /// One polyline through the points, in order.
    LineStrip,
}

impl PointNature {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            PointNature::Points => PointNature::LineStrip,
            PointNature::LineStrip => PointNature::Points,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PointNature::Points => "points",
            PointNature::LineStrip => "line strip",
        }
    }
}

/// Ordered set of independently colored points.
///
/// Each position carries exactly one color; the pairing is structural, so the
/// "as many colors as points" rule cannot be broken after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetOfPoints {
    points: Vec<ColoredPoint>,
    nature: PointNature,
}

impl SetOfPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the content with `coords` (`x, y` pairs) and `colors`
    /// (`r, g, b` triples), one color per point.
    pub fn init_set(&mut self, coords: &[f32], colors: &[f32]) -> Result<(), SceneError> {
        let positions = parse_coords(coords)?;
        if colors.len() % 3 != 0 {
            return Err(SceneError::PartialColor { len: colors.len() });
        }
        let color_count = colors.len() / 3;
        if color_count != positions.len() {
            return Err(SceneError::ColorCountMismatch {
                points: positions.len(),
                colors: color_count,
            });
        }

        self.points = positions
            .into_iter()
            .zip(colors.chunks_exact(3))
            .map(|(pos, rgb)| ColoredPoint::new(pos, Color::rgb(rgb[0], rgb[1], rgb[2])))
            .collect();
        Ok(())
    }

    /// Replaces the content with `coords`, every point in `color`.
    pub fn init_uniform(&mut self, coords: &[f32], color: Color) -> Result<(), SceneError> {
        let positions = parse_coords(coords)?;
        self.points = positions
            .into_iter()
            .map(|pos| ColoredPoint::new(pos, color))
            .collect();
        Ok(())
    }

    /// Appends one point.
    pub fn add_point(&mut self, pos: Vec2, color: Color) {
        self.points.push(ColoredPoint::new(pos, color));
    }

    #[inline]
    pub fn nature(&self) -> PointNature {
        self.nature
    }

    #[inline]
    pub fn change_nature(&mut self, nature: PointNature) {
        self.nature = nature;
    }

    /// Switches between points and line strip; returns the new nature.
    pub fn toggle_nature(&mut self) -> PointNature {
        self.nature = self.nature.toggled();
        self.nature
    }

    #[inline]
    pub fn points(&self) -> &[ColoredPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Splits a flat `x, y, x, y, ...` slice into points.
pub(super) fn parse_coords(coords: &[f32]) -> Result<Vec<Vec2>, SceneError> {
    if coords.len() % 2 != 0 {
        return Err(SceneError::OddCoordinateCount { len: coords.len() });
    }
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Vec2::new(xy[0], xy[1]))
        .collect())
}
