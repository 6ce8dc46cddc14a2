//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - the two retained helpers exercises build on: `SetOfPoints` and `ConvexShape`
//! - `Painter`, the per-frame recording surface (projection, flat color,
//!   transform stack)
//! - `DrawList`, the renderer-agnostic command stream the painter fills

mod cmd;
mod error;
mod list;
mod painter;
mod points;
mod shape;

pub use cmd::{ColoredPoint, DrawCmd, LinesCmd, PointsCmd, PolygonCmd};
pub use error::SceneError;
pub use list::DrawList;
pub use painter::Painter;
pub use points::{PointNature, SetOfPoints};
pub use shape::{ConvexShape, ShapeNature};
