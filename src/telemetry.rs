//! Tracing subscriber setup shared by the server and the CLI.

use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// `level` is an `EnvFilter` directive such as `info` or
/// `apollo_batch_links=debug,tower_http=info`; an invalid directive falls back
/// to `info`. `format` selects `json` output, anything else is plain text.
pub fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
