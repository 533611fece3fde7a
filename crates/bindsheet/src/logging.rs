//! Diagnostic logging.
//!
//! Logs go to stderr so the cheat sheet on stdout stays clean. The filter is
//! read from `BINDSHEET_LOG` using the usual `RUST_LOG` syntax:
//!
//! - `BINDSHEET_LOG=debug` - record counts, skipped rows, layout decisions
//! - `BINDSHEET_LOG=bindsheet::sheet=debug` - layout only
//!
//! Without it only warnings are shown.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BINDSHEET_LOG";

/// Installs the stderr subscriber. Does nothing if one is already installed.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
