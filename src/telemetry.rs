//! Tracing subscriber setup shared by the serverless functions and the CLI.

use tracing::Level;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
}

/// JSON lines for the Vercel log drain.
///
/// Safe to call on every warm invocation; only the first call installs the subscriber.
pub fn init_json() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().with_current_span(false))
        .try_init();
}

/// Human-readable output on stderr, for local runs.
pub fn init_pretty(verbose: bool) {
    let filter = if verbose { EnvFilter::new("debug") } else { env_filter() };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}
