use std::process::ExitCode;

use anyhow::{Context, Result};
use glbi_engine::core::App;
use glbi_engine::device::GpuInit;
use glbi_engine::logging::{init_logging, LoggingConfig};
use glbi_engine::window::{Runtime, RuntimeConfig};

/// Process exit code when the scene, window or GPU cannot be set up.
pub const INIT_FAILURE: u8 = 255;

/// Runs one exercise to completion.
///
/// `build` constructs the app once logging is up, so scene construction
/// diagnostics are visible. Any failure before or during startup is logged
/// and reported as [`INIT_FAILURE`]; a normal window close exits with 0.
pub fn launch<A, F>(config: RuntimeConfig, build: F) -> ExitCode
where
    A: App + 'static,
    F: FnOnce() -> Result<A>,
{
    init_logging(LoggingConfig::default());

    let result = build()
        .context("failed to build the scene")
        .and_then(|app| Runtime::run(config, GpuInit::linear(), app));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::from(INIT_FAILURE)
        }
    }
}
