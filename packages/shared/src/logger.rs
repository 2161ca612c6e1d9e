//! Logger setup shared by the binaries.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `default_level` applies to the binary
/// itself and to the notifier library.
///
/// Logs go to stderr; stdout is reserved for the diagnostic line. Colours are
/// only used when stderr is a terminal.
///
/// # Arguments
///
/// * `bin_name` - Name of the running binary (usually `env!("CARGO_BIN_NAME")`)
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. `"info"`)
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(true),
        )
        .try_init();
}

fn default_directives(bin_name: &str, default_level: &str) -> String {
    let bin_target = bin_name.replace('-', "_");
    format!("{bin_target}={default_level},campfire_notifier={default_level}")
}
