//! Logger initialization.
//!
//! Thin wrapper over the `log` facade and `env_logger`, meant to be called
//! once early in the host's `main`.

use std::sync::Once;

/// Logger configuration.
///
/// `filter` follows `env_logger` syntax (e.g. "info",
/// "warren_shell=debug"). When unset, `RUST_LOG` wins, then an info-level
/// default.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

static INIT: Once = Once::new();

/// Initializes the global logger. Idempotent; repeat calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match (config.filter, std::env::var("RUST_LOG").ok()) {
            (Some(filter), _) | (None, Some(filter)) => {
                builder.parse_filters(&filter);
            }
            (None, None) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
