//! CLI-specific error types and mappings.
//!
//! Handlers return `anyhow::Result`; [`exit_code_for`] looks through the
//! chain for a [`CliError`] or [`CoreError`] to pick the process exit code.

use quantctl_core::{CoreError, ProcessError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Process execution error.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Invalid arguments (reported by clap before any handler runs)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Io(_) => 74,      // EX_IOERR
            Self::Config(_) => 78,  // EX_CONFIG
            Self::Process(_) => 71, // EX_OSERR
        }
    }
}

impl From<&CoreError> for CliError {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::Process(ProcessError::PidFile(msg)) => Self::Io(msg.clone()),
            CoreError::Process(proc_err) => Self::Process(proc_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Path(path_err) => Self::Io(path_err.to_string()),
            CoreError::AlreadyRunning { .. } | CoreError::RestartAborted { .. } => {
                Self::Core(err.to_string())
            }
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from(&err)
    }
}

/// Exit code for an error that bubbled out of a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return cli.exit_code();
        }
        if let Some(core) = cause.downcast_ref::<CoreError>() {
            return CliError::from(core).exit_code();
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return 74;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use quantctl_core::{SettingsError, StopReport};

    #[test]
    fn core_errors_map_to_sysexits() {
        let cases = [
            (CoreError::AlreadyRunning { pid: 7 }, 1),
            (
                CoreError::RestartAborted {
                    report: StopReport::EmptyPidFile,
                },
                1,
            ),
            (CoreError::Settings(SettingsError::EmptyProgram), 78),
            (
                CoreError::Process(ProcessError::StopFailed("timed out".into())),
                71,
            ),
            (
                CoreError::Process(ProcessError::PidFile("read-only".into())),
                74,
            ),
        ];

        for (err, code) in cases {
            assert_eq!(CliError::from(err).exit_code(), code);
        }
    }

    #[test]
    fn exit_code_looks_through_context() {
        let err = Err::<(), _>(CoreError::Process(ProcessError::StartFailed("boom".into())))
            .context("starting trader")
            .unwrap_err();
        assert_eq!(exit_code_for(&err), 71);
    }

    #[test]
    fn unknown_errors_are_general_failures() {
        assert_eq!(exit_code_for(&anyhow::anyhow!("something odd")), 1);
    }

    #[test]
    fn already_running_message_names_pid() {
        let cli = CliError::from(CoreError::AlreadyRunning { pid: 4242 });
        assert_eq!(cli.to_string(), "Process is already running with PID 4242");
    }
}
