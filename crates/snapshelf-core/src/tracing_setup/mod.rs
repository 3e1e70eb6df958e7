//! Tracing setup: structured logging and span definitions.

pub mod spans;

use tracing_subscriber::fmt::format::{Format, Json, JsonFields};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config::defaults::DEFAULT_LOG_LEVEL;
use crate::constants::LOG_ENV_VAR;

/// The JSON subscriber every SnapShelf entry point installs.
pub type JsonSubscriber<W> =
    tracing_subscriber::fmt::Subscriber<JsonFields, Format<Json>, EnvFilter, W>;

/// Initialize the tracing subscriber with structured JSON output on stdout.
///
/// Respects the `SNAPSHELF_LOG` environment variable for filtering.
/// Defaults to `info` level if unset or unparseable. Returns an error if a
/// global subscriber is already installed; the existing one stays in place.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter = log_filter(std::env::var(LOG_ENV_VAR).ok().as_deref());
    json_subscriber(filter, std::io::stdout).try_init()
}

/// Initialize tracing with a custom filter string (for testing or embedding).
///
/// Same failure mode as [`init_tracing`].
pub fn init_tracing_with_filter(filter: &str) -> Result<(), TryInitError> {
    json_subscriber(EnvFilter::new(filter), std::io::stdout).try_init()
}

/// Parse a filter directive, falling back to `info` when absent or invalid.
pub fn log_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Build the JSON subscriber without installing it.
pub fn json_subscriber<W>(filter: EnvFilter, writer: W) -> JsonSubscriber<W>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .finish()
}
