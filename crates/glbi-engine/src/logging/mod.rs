//! Logging utilities.
//!
//! Centralizes logger initialization. Exercises log their diagnostics (scene
//! contents, resize events, click positions) through the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
