//! Diagnostic logging for the CLI
//!
//! Library code emits `tracing` events; the binary installs a stderr
//! subscriber here. `RUST_LOG` wins over the verbosity flag.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when `RUST_LOG` is unset.
pub fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Build the event filter for the given verbosity.
pub fn create_env_filter(verbose: bool) -> EnvFilter {
    let mut filter = EnvFilter::new(format!("huescale={}", default_level(verbose).as_str().to_lowercase()));

    if let Ok(env_filter) = std::env::var("RUST_LOG") {
        filter = EnvFilter::new(env_filter);
    }

    filter
}

/// Install the global subscriber. Calling it twice is harmless; the second
/// call keeps the first subscriber.
pub fn init(verbose: bool) {
    let layer = fmt::layer()
        .with_target(verbose)
        .without_time()
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry().with(create_env_filter(verbose)).with(layer).try_init();
}
