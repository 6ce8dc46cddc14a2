//! What an exercise implements ([`App`]) and what it receives each frame
//! ([`FrameCtx`]). Runtime internals stay in `window`.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
