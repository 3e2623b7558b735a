//! Project-wide constants.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Excuses per generation request unless the user changes it.
pub const DEFAULT_EXCUSE_COUNT: usize = 3;

/// Upper bound accepted by `/count` and `--count`.
pub const MAX_EXCUSE_COUNT: usize = 20;

/// Cosmetic pause before showing a batch, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 800;

/// Key holding the saved-excuse JSON array.
pub const SAVED_EXCUSES_KEY: &str = "savedExcuses";

/// Key holding the persisted batch size.
pub const EXCUSE_COUNT_KEY: &str = "excuseCount";

/// Env var that filters log output (`tracing_subscriber::EnvFilter` syntax).
pub const LOG_ENV: &str = "ALIBI_LOG";

/// Default database path: `~/.alibi/alibi.db`.
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".alibi").join("alibi.db"))
}
