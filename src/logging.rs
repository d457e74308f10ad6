//! Diagnostics for a CI job log.
//!
//! The only thing written to stdout is the version line, so callers can do
//! `VERSION=$(ci-semver-tag)`. Progress and errors go to stderr through the
//! subscriber set up here.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// `-v` count to level: warnings by default, one `-v` per step down to trace.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn filter_for(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install the stderr subscriber for this run.
///
/// A `RUST_LOG` directive wins over the `-v` level. Text output drops
/// timestamps because the CI runner prefixes its own; `json` switches to one
/// object per line for log shippers. A second install is ignored.
pub fn init_tracing(json: bool, level: Level) {
    let json_layer = json.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
    });
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    let installed = tracing_subscriber::registry()
        .with(filter_for(level))
        .with(json_layer)
        .with(text_layer)
        .try_init();
    if installed.is_err() {
        tracing::trace!("subscriber already installed");
    }
}
