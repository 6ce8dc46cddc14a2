use std::fmt;

/// Invalid geometry handed to a scene helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Coordinate slices hold `x, y` pairs; an odd length leaves a dangling value.
    OddCoordinateCount { len: usize },
    /// Color slices hold `r, g, b` triples.
    PartialColor { len: usize },
    /// Every point needs exactly one color.
    ColorCountMismatch { points: usize, colors: usize },
    /// A polygon needs at least three vertices.
    TooFewVertices { count: usize },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::OddCoordinateCount { len } => {
                write!(f, "coordinate slice has odd length {len}; expected x, y pairs")
            }
            SceneError::PartialColor { len } => {
                write!(f, "color slice length {len} is not a multiple of 3")
            }
            SceneError::ColorCountMismatch { points, colors } => {
                write!(f, "{points} points but {colors} colors")
            }
            SceneError::TooFewVertices { count } => {
                write!(f, "convex shape needs at least 3 vertices, got {count}")
            }
        }
    }
}

impl std::error::Error for SceneError {}
