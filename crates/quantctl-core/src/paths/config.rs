//! Location of the `.env` file.
//!
//! The file holds API keys for the market-data and brokerage services the
//! supervised program talks to. It is loaded into this process's environment
//! before launch so the child inherits the values.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::work_root;

/// Location of the `.env` file.
pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(work_root()?.join(".env"))
}
