//! glbi engine crate.
//!
//! A small 2D teaching engine: it owns the platform + GPU runtime pieces, the
//! fixed-framerate loop, and the two drawing helpers the exercises build on
//! (point sets and convex shapes).

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod transform;
pub mod render;
pub mod paint;
pub mod scene;
