//! Process inspection and termination port.
//!
//! This port expresses the three things the supervisor needs from the
//! operating system: "is this pid alive and what is it", "which processes
//! look like ours", and "make this pid go away".

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ProcessError;

/// Interval between liveness polls during termination.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Snapshot of a live process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Process id.
    pub pid: u32,
    /// Executable name as reported by the OS.
    pub name: String,
    /// Full command line joined with spaces. Empty when unreadable.
    pub command: String,
    /// Unix timestamp (seconds) when the process started, if known.
    pub started_at: Option<u64>,
}

/// Result of comparing a process against the expected command pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// The command line contains the pattern.
    Matches,
    /// The command line is known and does not contain the pattern.
    Mismatch,
    /// The command line could not be read.
    Unknown,
}

impl ProcessInfo {
    /// Create a process snapshot.
    pub fn new(pid: u32, name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
            command: command.into(),
            started_at: None,
        }
    }

    /// Set the start time.
    #[must_use]
    pub const fn with_started_at(mut self, started_at: u64) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Compare this process against `pattern`.
    pub fn identity(&self, pattern: &str) -> Identity {
        if self.command.is_empty() {
            if self.name.is_empty() {
                return Identity::Unknown;
            }
            return if self.name.contains(pattern) {
                Identity::Matches
            } else {
                Identity::Unknown
            };
        }

        if self.command.contains(pattern) {
            Identity::Matches
        } else {
            Identity::Mismatch
        }
    }
}

/// Timings for SIGTERM → SIGKILL escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownPolicy {
    /// How long to wait after SIGTERM.
    pub grace_period: Duration,
    /// How long to wait after SIGKILL.
    pub kill_timeout: Duration,
    /// Polling interval while waiting.
    pub poll_interval: Duration,
}

impl ShutdownPolicy {
    /// Create a policy with the default poll interval.
    #[must_use]
    pub const fn new(grace_period: Duration, kill_timeout: Duration) -> Self {
        Self {
            grace_period,
            kill_timeout,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the poll interval.
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

/// How a process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Exited within the grace period after SIGTERM.
    Graceful,
    /// Needed SIGKILL.
    Forced,
    /// Was already gone when we looked.
    AlreadyExited,
}

/// Operating-system process operations used by the supervisor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcessControl: Send + Sync {
    /// Describe `pid` if it names a live (non-zombie) process.
    fn inspect(&self, pid: u32) -> Option<ProcessInfo>;

    /// All live processes whose command line contains `pattern`,
    /// excluding the calling process and its parent.
    fn find_matching(&self, pattern: &str) -> Vec<ProcessInfo>;

    /// Terminate `pid`, escalating from SIGTERM to SIGKILL per `policy`.
    async fn terminate(
        &self,
        pid: u32,
        policy: ShutdownPolicy,
    ) -> Result<Termination, ProcessError>;
}
