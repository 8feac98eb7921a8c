//! Settings domain types and validation.
//!
//! Describes what to launch and how to shut it down. These are pure domain
//! types; the CLI fills a [`SettingsUpdate`] from flags and environment
//! variables and merges it over [`Settings::with_defaults`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::paths::{DEFAULT_PID_FILE, check_file_name};
use crate::ports::ShutdownPolicy;

/// Default program used to run the trading loop.
pub const DEFAULT_PROGRAM: &str = "python";

/// Default entry script passed to the program.
pub const DEFAULT_ENTRY_SCRIPT: &str = "main.py";

/// Default base name for log files (`trade.<timestamp>.log`).
pub const DEFAULT_LOG_NAME: &str = "trade";

/// Default wait after SIGTERM before escalating to SIGKILL.
pub const DEFAULT_GRACE_PERIOD_SECS: u64 = 10;

/// Default wait after SIGKILL before giving up.
pub const DEFAULT_KILL_TIMEOUT_SECS: u64 = 2;

/// Default time `start` watches the child for an immediate exit.
pub const DEFAULT_STARTUP_CHECK_MS: u64 = 1000;

/// Supervisor settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Executable to launch.
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,

    /// Command-line substring identifying the program.
    ///
    /// When unset, the last argument (or the program itself) is used.
    pub process_pattern: Option<String>,

    /// PID file name inside the work root.
    pub pid_file: String,

    /// Base name of log files.
    pub log_name: String,

    /// Seconds to wait after SIGTERM.
    pub grace_period_secs: u64,

    /// Seconds to wait after SIGKILL.
    pub kill_timeout_secs: u64,

    /// Milliseconds to watch a fresh child for an early exit (0 disables).
    pub startup_check_ms: u64,

    /// Treat a live PID whose command line does not match the pattern as stale.
    pub verify_identity: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: vec![DEFAULT_ENTRY_SCRIPT.to_string()],
            process_pattern: None,
            pid_file: DEFAULT_PID_FILE.to_string(),
            log_name: DEFAULT_LOG_NAME.to_string(),
            grace_period_secs: DEFAULT_GRACE_PERIOD_SECS,
            kill_timeout_secs: DEFAULT_KILL_TIMEOUT_SECS,
            startup_check_ms: DEFAULT_STARTUP_CHECK_MS,
            verify_identity: true,
        }
    }

    /// Pattern used for identity checks and the name-based fallback.
    pub fn effective_pattern(&self) -> &str {
        if let Some(pattern) = self.process_pattern.as_deref()
            && !pattern.trim().is_empty()
        {
            return pattern;
        }
        self.args.last().map_or(self.program.as_str(), String::as_str)
    }

    /// Two-phase termination timings derived from these settings.
    #[must_use]
    pub const fn shutdown_policy(&self) -> ShutdownPolicy {
        ShutdownPolicy::new(
            Duration::from_secs(self.grace_period_secs),
            Duration::from_secs(self.kill_timeout_secs),
        )
    }

    /// How long `start` watches the child before declaring success.
    #[must_use]
    pub const fn startup_check(&self) -> Duration {
        Duration::from_millis(self.startup_check_ms)
    }

    /// Merge an update into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref program) = other.program {
            self.program.clone_from(program);
        }
        if let Some(ref args) = other.args {
            self.args.clone_from(args);
        }
        if let Some(ref pattern) = other.process_pattern {
            self.process_pattern.clone_from(pattern);
        }
        if let Some(ref pid_file) = other.pid_file {
            self.pid_file.clone_from(pid_file);
        }
        if let Some(ref log_name) = other.log_name {
            self.log_name.clone_from(log_name);
        }
        if let Some(secs) = other.grace_period_secs {
            self.grace_period_secs = secs;
        }
        if let Some(secs) = other.kill_timeout_secs {
            self.kill_timeout_secs = secs;
        }
        if let Some(ms) = other.startup_check_ms {
            self.startup_check_ms = ms;
        }
        if let Some(verify) = other.verify_identity {
            self.verify_identity = verify;
        }
    }
}

/// Partial settings update.
///
/// `None` leaves the field unchanged. `process_pattern` is doubly optional:
/// `Some(None)` clears an explicit pattern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
    pub process_pattern: Option<Option<String>>,
    pub pid_file: Option<String>,
    pub log_name: Option<String>,
    pub grace_period_secs: Option<u64>,
    pub kill_timeout_secs: Option<u64>,
    pub startup_check_ms: Option<u64>,
    pub verify_identity: Option<bool>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Program to launch cannot be empty")]
    EmptyProgram,

    #[error("PID file must be a plain, non-empty file name, got {0:?}")]
    InvalidPidFile(String),

    #[error("Log name must be a plain, non-empty file name, got {0:?}")]
    InvalidLogName(String),

    #[error("Process pattern cannot be empty")]
    EmptyPattern,

    #[error("Grace period must be at least 1 second, got {0}")]
    InvalidGracePeriod(u64),

    #[error("Kill timeout must be at least 1 second, got {0}")]
    InvalidKillTimeout(u64),
}

/// Validate settings before they reach the supervisor.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.program.trim().is_empty() {
        return Err(SettingsError::EmptyProgram);
    }

    if check_file_name(&settings.pid_file).is_err() {
        return Err(SettingsError::InvalidPidFile(settings.pid_file.clone()));
    }

    if check_file_name(&settings.log_name).is_err() {
        return Err(SettingsError::InvalidLogName(settings.log_name.clone()));
    }

    if settings.effective_pattern().trim().is_empty() {
        return Err(SettingsError::EmptyPattern);
    }

    if settings.grace_period_secs == 0 {
        return Err(SettingsError::InvalidGracePeriod(settings.grace_period_secs));
    }

    if settings.kill_timeout_secs == 0 {
        return Err(SettingsError::InvalidKillTimeout(settings.kill_timeout_secs));
    }

    Ok(())
}
