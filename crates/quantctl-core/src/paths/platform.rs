//! Work root detection.
//!
//! Everything the supervisor persists (PID file, logs, `.env`) lives under a
//! single directory. By default that is the directory the command was run
//! from, the same place the PID file has always lived.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the work root.
pub const HOME_ENV: &str = "QUANTCTL_HOME";

/// Get the root directory holding the PID file, `logs/` and `.env`.
///
/// Resolution order:
/// 1. `QUANTCTL_HOME` environment variable (ignored when empty)
/// 2. The current working directory
pub fn work_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(HOME_ENV)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path.trim()));
    }

    env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}
