//! Path utilities for the supervisor's on-disk state.
//!
//! This module provides the canonical path resolution for:
//! - The PID file
//! - The log directory
//! - The `.env` file with API keys for the supervised program
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user output separately

mod config;
mod error;
mod logs;
mod pids;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

pub use config::env_file_path;
pub use error::PathError;
pub use logs::logs_dir;
pub use pids::{DEFAULT_PID_FILE, pid_file_path};
pub use platform::{HOME_ENV, work_root};
pub use resolver::ResolvedPaths;

pub(crate) use pids::check_file_name;
