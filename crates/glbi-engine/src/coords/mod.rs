//! Coordinate and geometry types shared by the scene, the renderer and the
//! exercises.
//!
//! Two spaces are in play:
//! - screen space: logical pixels, origin top-left, +Y down (pointer input)
//! - virtual space: origin at the center, +Y up, extent chosen per exercise
//!
//! `OrthoBounds` describes which part of virtual space is visible;
//! `screen_to_virtual` maps pointer positions into it.

mod ortho;
mod vec2;
mod viewport;
mod virtual_space;

pub use ortho::OrthoBounds;
pub use vec2::Vec2;
pub use viewport::Viewport;
pub use virtual_space::screen_to_virtual;
