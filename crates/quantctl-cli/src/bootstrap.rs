//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Settings (defaults, then environment and flags via [`CliConfig`])
//! - Paths (via `quantctl_core::paths`)
//! - OS adapters (via `quantctl-runtime`)
//!
//! Command handlers receive the composed [`CliContext`].

use quantctl_core::{ResolvedPaths, Settings, SettingsUpdate, Supervisor, validate_settings};
use quantctl_runtime::system_ports;
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Overrides collected from flags and `QUANTCTL_*` variables.
    pub overrides: SettingsUpdate,
}

impl CliConfig {
    /// Collect the settings overrides present on the command line.
    pub fn from_cli(cli: &Cli) -> Self {
        let overrides = SettingsUpdate {
            program: cli.program.clone(),
            args: (!cli.args.is_empty()).then(|| cli.args.clone()),
            process_pattern: cli.pattern.clone().map(Some),
            pid_file: cli.pid_file.clone(),
            log_name: cli.log_name.clone(),
            grace_period_secs: cli.grace_period,
            kill_timeout_secs: cli.kill_timeout,
            startup_check_ms: cli.startup_check_ms,
            verify_identity: cli.no_verify_identity.then_some(false),
        };
        Self { overrides }
    }

    /// Defaults with these overrides applied, validated.
    pub fn settings(&self) -> Result<Settings, CliError> {
        let mut settings = Settings::with_defaults();
        settings.merge(&self.overrides);
        validate_settings(&settings).map_err(|e| CliError::Config(e.to_string()))?;
        Ok(settings)
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Where the PID file, logs and `.env` live.
    pub paths: ResolvedPaths,
    /// Supervisor wired to the real OS adapters.
    pub supervisor: Supervisor,
}

impl CliContext {
    /// Wire the system adapters for `settings` under `paths`.
    pub fn new(settings: Settings, paths: ResolvedPaths) -> Self {
        let ports = system_ports(&paths);
        let supervisor = Supervisor::new(settings, &paths, ports);
        Self { paths, supervisor }
    }

    /// Effective settings.
    pub const fn settings(&self) -> &Settings {
        self.supervisor.settings()
    }
}

/// Bootstrap the CLI application.
///
/// Merges and validates settings, resolves paths for the configured PID
/// file name, then wires the supervisor.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let settings = config.settings()?;
    let paths = ResolvedPaths::resolve(&settings.pid_file).map_err(|e| CliError::Io(e.to_string()))?;
    debug!(work_root = %paths.work_root.display(), pattern = %settings.effective_pattern(), "Bootstrapped");
    Ok(CliContext::new(settings, paths))
}
