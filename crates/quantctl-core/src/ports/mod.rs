//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the supervisor expects from the
//! operating system. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `nix`/`sysinfo` types in any signature
//! - Intent-based methods (inspect, terminate, launch), not syscalls

pub mod launcher;
pub mod pid_store;
pub mod process_control;

use thiserror::Error;

pub use launcher::{LaunchSpec, LaunchedProcess, Launcher};
pub use pid_store::{PidFileState, PidStore};
pub use process_control::{
    DEFAULT_POLL_INTERVAL, Identity, ProcessControl, ProcessInfo, ShutdownPolicy, Termination,
};

#[cfg(test)]
pub use process_control::MockProcessControl;

/// Domain-specific errors for process operations.
///
/// This error type abstracts away process management implementation details
/// and provides a clean interface for the supervisor to handle failures.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to start the process.
    #[error("Failed to start: {0}")]
    StartFailed(String),

    /// Failed to stop the process.
    #[error("Failed to stop: {0}")]
    StopFailed(String),

    /// Reading, writing or deleting the PID file failed.
    #[error("PID file error: {0}")]
    PidFile(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Process operation failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Path resolution error.
    #[error(transparent)]
    Path(#[from] crate::paths::PathError),

    /// A live process is already tracked by the PID file.
    #[error("Process is already running with PID {pid}")]
    AlreadyRunning { pid: u32 },

    /// `restart` stopped short of starting because an earlier instance may
    /// still be running.
    #[error("Not starting a new instance: the previous one may still be running")]
    RestartAborted { report: crate::domain::StopReport },
}
