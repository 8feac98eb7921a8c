//! Outcomes of start, stop and status.
//!
//! These are plain data; the CLI decides how to print them and which exit
//! code each one maps to.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ports::{ProcessInfo, Termination};

/// Result of a successful `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartReport {
    /// Process id of the launched program.
    pub pid: u32,
    /// File receiving the program's output.
    pub log_path: PathBuf,
    /// PID file that now tracks the program.
    pub pid_file: PathBuf,
    /// Process id left behind by a previous run, if a stale file was replaced.
    pub replaced_stale: Option<u32>,
}

/// Result of `stop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StopReport {
    /// The tracked process was terminated and the PID file removed.
    Stopped { pid: u32, termination: Termination },

    /// The PID file named a process that no longer exists (or was reused);
    /// the file was removed.
    StalePidFile { pid: u32 },

    /// The PID file was empty; the file was removed.
    EmptyPidFile,

    /// The PID file held something other than a process id; the file was removed.
    InvalidPidFile { contents: String },

    /// No PID file; processes matching the pattern were terminated.
    StoppedByName {
        stopped: Vec<(u32, Termination)>,
        failed: Vec<(u32, String)>,
    },

    /// No PID file and nothing matched the pattern.
    NothingRunning,
}

impl StopReport {
    /// Whether the user should look at the system by hand.
    pub fn needs_attention(&self) -> bool {
        match self {
            Self::EmptyPidFile | Self::InvalidPidFile { .. } => true,
            Self::StoppedByName { failed, .. } => !failed.is_empty(),
            Self::Stopped { .. } | Self::StalePidFile { .. } | Self::NothingRunning => false,
        }
    }
}

/// What the PID file and process table say right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TrackedState {
    /// The PID file names a live process.
    Running { process: ProcessInfo },
    /// The PID file names a process that is gone or was reused.
    Stale { pid: u32 },
    /// The PID file is empty.
    Empty,
    /// The PID file content is not a process id.
    Invalid { contents: String },
    /// No PID file. `untracked` lists processes matching the pattern anyway.
    NotRunning { untracked: Vec<ProcessInfo> },
}

/// Result of `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub pid_file: PathBuf,
    pub pattern: String,
    #[serde(flatten)]
    pub state: TrackedState,
}

impl StatusReport {
    /// Whether the tracked program is up.
    pub const fn is_running(&self) -> bool {
        matches!(self.state, TrackedState::Running { .. })
    }
}
