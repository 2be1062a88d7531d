//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env};

/// Setup logging with `default_level` as the filter when `RUST_LOG` is unset.
pub fn setup_logging(default_level: &str) {
    let env = Env::default().default_filter_or(default_level);
    if let Err(e) = Builder::from_env(env).format_timestamp_secs().try_init() {
        eprintln!("Logger already initialised: {}", e);
    }
}
