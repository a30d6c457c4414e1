//! Logger initialization.
//!
//! Diagnostics go to stderr through `env_logger` so they never interleave
//! with the console transcript on stdout. `RUST_LOG` is honoured, e.g.
//!
//! ```bash
//! RUST_LOG=api_query_demo=debug api-query-demo
//! ```

use log::{LevelFilter, SetLoggerError};

/// Default filter when `RUST_LOG` is unset: quiet unless something failed.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

pub fn init() -> Result<(), SetLoggerError> {
    init_with(DEFAULT_LEVEL)
}

/// Initialise with `level` as the baseline; directives in `RUST_LOG` take
/// precedence.
pub fn init_with(level: LevelFilter) -> Result<(), SetLoggerError> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper", LevelFilter::Warn)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None);

    // try_init: tests may have installed a logger already.
    builder.try_init()
}
