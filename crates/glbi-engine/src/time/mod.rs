//! Time subsystem.
//!
//! - `FrameClock`: one per window, `tick()` once per presented frame to get a
//!   `FrameTime` (delta, frame index, time since start)
//! - `FramePacer`: enforces the minimum interval between two frames

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::{FramePacer, DEFAULT_FRAME_INTERVAL};
