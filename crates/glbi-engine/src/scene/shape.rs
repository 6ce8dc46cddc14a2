use std::f32::consts::TAU;

use crate::coords::Vec2;

use super::error::SceneError;
use super::points::parse_coords;

/// How a convex shape is drawn.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ShapeNature {
    /// Closed outline through the vertices.
    #[default]
    Outline,
    /// Filled polygon.
    Filled,
}

impl ShapeNature {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            ShapeNature::Outline => ShapeNature::Filled,
            ShapeNature::Filled => ShapeNature::Outline,
        }
    }
}

/// Convex polygon defined by an ordered vertex list.
///
/// Filling triangulates as a fan around the first vertex, which is only
/// correct for convex input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvexShape {
    vertices: Vec<Vec2>,
    nature: ShapeNature,
}

impl ConvexShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the vertices with `coords` (`x, y` pairs, at least three).
    ///
    /// Concave input is kept but warned about: filling it draws a wrong fan.
    pub fn init_shape(&mut self, coords: &[f32]) -> Result<(), SceneError> {
        let vertices = parse_coords(coords)?;
        if vertices.len() < 3 {
            return Err(SceneError::TooFewVertices { count: vertices.len() });
        }
        self.vertices = vertices;
        if !self.is_convex() {
            log::warn!("shape: {} vertices are not convex, filling will be wrong", self.vertices.len());
        }
        Ok(())
    }

    /// Builds a shape from `coords` in one step.
    pub fn from_coords(coords: &[f32]) -> Result<Self, SceneError> {
        let mut shape = Self::new();
        shape.init_shape(coords)?;
        Ok(shape)
    }

    /// Axis-aligned square of side 1 centered on the origin.
    pub fn unit_square() -> Self {
        Self::from_vertices(vec![
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(-0.5, 0.5),
        ])
    }

    /// Triangle inscribed in the unit square, apex up.
    pub fn unit_triangle() -> Self {
        Self::from_vertices(vec![
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.0, 0.5),
        ])
    }

    /// Regular polygon approximating a circle of `radius`, first vertex on +X.
    ///
    /// `segments` below 3 is raised to 3.
    pub fn regular_polygon(radius: f32, segments: usize) -> Self {
        let n = segments.max(3);
        let vertices = (0..n)
            .map(|i| Vec2::from_polar(radius, TAU * i as f32 / n as f32))
            .collect();
        Self::from_vertices(vertices)
    }

    fn from_vertices(vertices: Vec<Vec2>) -> Self {
        Self { vertices, nature: ShapeNature::default() }
    }

    /// Returns `self` drawn with `nature`.
    pub fn with_nature(mut self, nature: ShapeNature) -> Self {
        self.nature = nature;
        self
    }

    #[inline]
    pub fn nature(&self) -> ShapeNature {
        self.nature
    }

    #[inline]
    pub fn change_nature(&mut self, nature: ShapeNature) {
        self.nature = nature;
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when every turn along the outline has the same orientation.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut sign = 0.0f32;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            if cross.abs() <= f32::EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }
}
