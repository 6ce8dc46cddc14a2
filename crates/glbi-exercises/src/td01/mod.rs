//! TD01: window, input callbacks and the clear color.

pub mod ex06;
