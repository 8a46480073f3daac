//! fnref Runner
//!
//! Lists and runs the scenario catalog from the command line.

#![allow(missing_docs)]

pub mod cli;
pub mod config;

pub use cli::{build_cli, execute};
pub use config::{apply_overrides, load_config, ConfigError, Overrides};

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn,fnref=info,fnref_runner=info,fnref_scenarios=info";

/// Install the fmt subscriber, honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
