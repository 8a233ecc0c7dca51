// Tracing setup for the dashboard server.
//
// Events go to stdout and, without colour codes, to `{LOG_DIR}/dashboard.log`.
// `RUST_LOG` overrides the filter; the default keeps the HTTP stack at `warn`.
// Request spans from the router's `TraceLayer` show up with
// `RUST_LOG=info,tower_http=debug`.

use std::path::Path;

use tracing_appender::non_blocking;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "dashboard.log";
pub const DEFAULT_FILTER: &str = "info,hyper=warn,tower=warn,tower_http=warn";

/// Install the global subscriber. Hold the returned guard until the server
/// stops, otherwise the tail of the log file is lost.
pub fn init(log_dir: &Path) -> non_blocking::WorkerGuard {
    let (file_writer, guard) =
        non_blocking(tracing_appender::rolling::never(log_dir, LOG_FILE_NAME));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    guard
}
