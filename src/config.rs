//! Persisted user preferences.
//!
//! Preferences share the key-value store with the saved excuses, under
//! their own keys. Unreadable values fall back to defaults.

use anyhow::{Result, bail};
use tracing::warn;

use crate::consts::{DEFAULT_EXCUSE_COUNT, EXCUSE_COUNT_KEY, MAX_EXCUSE_COUNT};
use crate::store::KeyValueStore;

/// Check that a batch size is in `1..=MAX_EXCUSE_COUNT`.
pub fn check_count(count: usize) -> Result<usize> {
    if count == 0 || count > MAX_EXCUSE_COUNT {
        bail!("count must be between 1 and {MAX_EXCUSE_COUNT}");
    }
    Ok(count)
}

/// The persisted batch size, or the default.
pub fn excuse_count(kv: &dyn KeyValueStore) -> usize {
    let raw = match kv.get(EXCUSE_COUNT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return DEFAULT_EXCUSE_COUNT,
        Err(e) => {
            warn!(error = %e, "failed to read excuse count");
            return DEFAULT_EXCUSE_COUNT;
        }
    };
    match raw.parse().ok().and_then(|n| check_count(n).ok()) {
        Some(n) => n,
        None => {
            warn!(value = %raw, "ignoring invalid excuse count");
            DEFAULT_EXCUSE_COUNT
        }
    }
}

/// Persist a new batch size.
pub fn set_excuse_count(kv: &dyn KeyValueStore, count: usize) -> Result<()> {
    let count = check_count(count)?;
    kv.set(EXCUSE_COUNT_KEY, &count.to_string())
}
