//! Log output for the command-line tool.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber, writing compact lines to stderr.
///
/// `RUST_LOG` takes precedence; otherwise only this crate logs, at `info`
/// (or `debug` when `verbose`).
pub fn init(verbose: bool) {
    let default = if verbose {
        "diferencilo=debug"
    } else {
        "diferencilo=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
