use std::sync::Once;

use log::LevelFilter;

/// Backend crates that log per-frame detail at `info`.
const GPU_MODULES: [&str; 4] = ["wgpu_core", "wgpu_hal", "naga", "wgpu"];

/// Logger configuration.
///
/// Precedence: `env_filter`, then `RUST_LOG`, then `level` with the GPU
/// backends capped at `warn` when `quiet_gpu` is set.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter string, e.g. `"glbi_engine=debug,wgpu=warn"`.
    pub env_filter: Option<String>,
    pub level: LevelFilter,
    pub quiet_gpu: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            level: LevelFilter::Info,
            quiet_gpu: true,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Per-module caps applied when no filter string is given.
    fn module_caps(&self) -> Vec<(&'static str, LevelFilter)> {
        if !self.quiet_gpu {
            return Vec::new();
        }
        let cap = self.level.min(LevelFilter::Warn);
        GPU_MODULES.iter().map(|&m| (m, cap)).collect()
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` once; later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.clone().or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.level);
                for (module, level) in config.module_caps() {
                    builder.filter_module(module, level);
                }
            }
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging: initialized at {}", config.level);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_backends_are_capped_at_warn() {
        let caps = LoggingConfig::default().module_caps();
        assert_eq!(caps.len(), GPU_MODULES.len());
        assert!(caps.iter().all(|&(_, l)| l == LevelFilter::Warn));
    }

    #[test]
    fn cap_never_raises_a_quieter_level() {
        let cfg = LoggingConfig { level: LevelFilter::Error, ..LoggingConfig::default() };
        assert!(cfg.module_caps().iter().all(|&(_, l)| l == LevelFilter::Error));
    }

    #[test]
    fn loud_gpu_adds_no_caps() {
        let cfg = LoggingConfig { quiet_gpu: false, ..LoggingConfig::default() };
        assert!(cfg.module_caps().is_empty());
    }
}
