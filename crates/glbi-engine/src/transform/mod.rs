//! 2D affine transforms.
//!
//! `Transform2D` is a single matrix; `TransformStack` is the current model
//! matrix plus a save stack, mirroring the classic fixed-function
//! `push`/`pop` workflow used for hierarchical drawings.

mod affine;
mod stack;

pub use affine::Transform2D;
pub use stack::TransformStack;
