//! Log directory resolution.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::work_root;

/// Directory where the supervised program's output is written.
///
/// Location: `<work_root>/logs`
pub fn logs_dir() -> Result<PathBuf, PathError> {
    Ok(work_root()?.join("logs"))
}
