//! Diagnostic output for the CLI.

use std::path::PathBuf;

use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Variable holding the tracing filter directive.
pub const LOG_ENV: &str = "DIETPLAN_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Load `.env`, then install the stderr subscriber so `.env` can set the filter.
pub fn init() {
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();

    report_dotenv(dotenv);
}

fn report_dotenv(result: Result<PathBuf, dotenvy::Error>) {
    match result {
        Ok(path) => debug!(path = %path.display(), "Loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!("Failed to load .env: {}", err),
    }
}
