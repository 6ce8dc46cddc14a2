//! The TD01–TD03 exercises, each a `glbi_engine::core::App`.
//!
//! Every exercise module exposes a `config()` for its window and an app type
//! whose input handling and animation are plain methods, so the scene logic
//! can be driven without a window. `src/bin/*` wires one exercise to
//! [`launch`].

mod common;
mod launch;

pub mod td01;
pub mod td02;
pub mod td03;

pub use common::{sample_points, Stage, CLEAR_COLOR, SAMPLE_COLORS, SAMPLE_COORDS};
pub use launch::{launch, INIT_FAILURE};
