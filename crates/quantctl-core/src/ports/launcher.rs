//! Launcher port for starting the supervised program in the background.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ProcessError;

/// What to launch and where its output goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSpec {
    /// Executable to run.
    pub program: String,
    /// Arguments for the executable.
    pub args: Vec<String>,
    /// Working directory of the child.
    pub working_dir: PathBuf,
    /// Directory receiving the log file.
    pub log_dir: PathBuf,
    /// Base name of the log file.
    pub log_name: String,
    /// How long to watch the child for an early exit.
    pub startup_check: Duration,
}

impl LaunchSpec {
    /// Create a spec with no startup check.
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        working_dir: impl Into<PathBuf>,
        log_dir: impl Into<PathBuf>,
        log_name: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: working_dir.into(),
            log_dir: log_dir.into(),
            log_name: log_name.into(),
            startup_check: Duration::ZERO,
        }
    }

    /// Watch the child for `check` before reporting success.
    #[must_use]
    pub const fn with_startup_check(mut self, check: Duration) -> Self {
        self.startup_check = check;
        self
    }

    /// The command line as a user would type it.
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A freshly launched background process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchedProcess {
    /// Process id of the child.
    pub pid: u32,
    /// File receiving the child's stdout and stderr.
    pub log_path: PathBuf,
}

/// Starts the supervised program detached from the caller.
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Launch the program described by `spec`.
    ///
    /// Implementations must not wait for the child beyond `spec.startup_check`.
    async fn launch(&self, spec: &LaunchSpec) -> Result<LaunchedProcess, ProcessError>;
}
