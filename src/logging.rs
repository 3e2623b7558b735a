//! Log setup. Logs go to stderr so they never mix with excuse output.

use tracing_subscriber::EnvFilter;

use crate::consts::LOG_ENV;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, filtered by `ALIBI_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
