//! Paint model shared between the scene and the renderer.
//!
//! Exercises draw with flat colors only: one color per point, one flat color
//! per shape draw, one clear color per frame.

pub mod color;

pub use color::{Channel, Color};
