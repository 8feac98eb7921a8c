//! Supervisor service - orchestrates the start/stop lifecycle of the
//! background trading program.
//!
//! The PID file is the single source of truth for "which process is ours".
//! When it is missing, `stop` falls back to matching the command line.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{StartReport, StatusReport, StopReport, TrackedState};
use crate::paths::ResolvedPaths;
use crate::ports::{
    CoreError, Identity, LaunchSpec, Launcher, PidFileState, PidStore, ProcessControl,
    ProcessInfo,
};
use crate::settings::Settings;

/// Adapters the supervisor drives.
#[derive(Clone)]
pub struct SupervisorPorts {
    pub pid_store: Arc<dyn PidStore>,
    pub control: Arc<dyn ProcessControl>,
    pub launcher: Arc<dyn Launcher>,
}

impl SupervisorPorts {
    /// Bundle the three adapters.
    pub fn new(
        pid_store: Arc<dyn PidStore>,
        control: Arc<dyn ProcessControl>,
        launcher: Arc<dyn Launcher>,
    ) -> Self {
        Self {
            pid_store,
            control,
            launcher,
        }
    }
}

/// Interpretation of the PID file against the live process table.
#[derive(Debug)]
enum Tracked {
    Running(ProcessInfo),
    Stale(u32),
    Empty,
    Invalid(String),
    Untracked,
}

/// Service managing the single supervised background process.
pub struct Supervisor {
    settings: Settings,
    launch_spec: LaunchSpec,
    ports: SupervisorPorts,
}

impl Supervisor {
    /// Create a supervisor for `settings`, launching inside `paths.work_root`.
    pub fn new(settings: Settings, paths: &ResolvedPaths, ports: SupervisorPorts) -> Self {
        let launch_spec = LaunchSpec::new(
            settings.program.clone(),
            settings.args.clone(),
            &paths.work_root,
            &paths.logs_dir,
            settings.log_name.clone(),
        )
        .with_startup_check(settings.startup_check());

        Self {
            settings,
            launch_spec,
            ports,
        }
    }

    /// Effective settings.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Location of the PID file.
    pub fn pid_file(&self) -> &Path {
        self.ports.pid_store.path()
    }

    fn pattern(&self) -> &str {
        self.settings.effective_pattern()
    }

    fn classify(&self) -> Result<Tracked, CoreError> {
        let tracked = match self.ports.pid_store.read()? {
            PidFileState::Missing => Tracked::Untracked,
            PidFileState::Empty => Tracked::Empty,
            PidFileState::Invalid(contents) => Tracked::Invalid(contents),
            PidFileState::Pid(pid) => match self.ports.control.inspect(pid) {
                None => Tracked::Stale(pid),
                Some(process) => {
                    if self.settings.verify_identity
                        && process.identity(self.pattern()) == Identity::Mismatch
                    {
                        warn!(
                            pid,
                            command = %process.command,
                            pattern = %self.pattern(),
                            "PID was reused by an unrelated process"
                        );
                        Tracked::Stale(pid)
                    } else {
                        Tracked::Running(process)
                    }
                }
            },
        };
        debug!(?tracked, pid_file = %self.pid_file().display(), "Classified PID file");
        Ok(tracked)
    }

    /// Launch the program in the background and record its PID.
    ///
    /// Refuses with [`CoreError::AlreadyRunning`] if the PID file names a
    /// live process. Stale, empty and malformed PID files are replaced.
    pub async fn start(&self) -> Result<StartReport, CoreError> {
        let mut replaced_stale = None;

        match self.classify()? {
            Tracked::Running(process) => {
                return Err(CoreError::AlreadyRunning { pid: process.pid });
            }
            Tracked::Stale(pid) => {
                warn!(pid, "Removing stale PID file before start");
                self.ports.pid_store.remove()?;
                replaced_stale = Some(pid);
            }
            Tracked::Empty => {
                warn!("Removing empty PID file before start");
                self.ports.pid_store.remove()?;
            }
            Tracked::Invalid(contents) => {
                warn!(%contents, "Removing malformed PID file before start");
                self.ports.pid_store.remove()?;
            }
            Tracked::Untracked => {
                let untracked = self.ports.control.find_matching(self.pattern());
                if !untracked.is_empty() {
                    let pids: Vec<u32> = untracked.iter().map(|p| p.pid).collect();
                    warn!(
                        ?pids,
                        pattern = %self.pattern(),
                        "Processes matching the pattern are running without a PID file"
                    );
                }
            }
        }

        info!(command = %self.launch_spec.display_command(), "Launching");
        let launched = self.ports.launcher.launch(&self.launch_spec).await?;

        if let Err(e) = self.ports.pid_store.write(launched.pid) {
            warn!(pid = launched.pid, "Failed to record PID, terminating launched process");
            if let Err(kill_err) = self
                .ports
                .control
                .terminate(launched.pid, self.settings.shutdown_policy())
                .await
            {
                warn!(pid = launched.pid, "Failed to terminate untracked process: {}", kill_err);
            }
            return Err(e.into());
        }

        info!(pid = launched.pid, log = %launched.log_path.display(), "Started");

        Ok(StartReport {
            pid: launched.pid,
            log_path: launched.log_path,
            pid_file: self.pid_file().to_path_buf(),
            replaced_stale,
        })
    }

    /// Terminate the tracked process, or anything matching the pattern if
    /// there is no PID file.
    ///
    /// The PID file is removed once the tracked process is gone. If
    /// termination fails the file is kept so the stop can be retried.
    pub async fn stop(&self) -> Result<StopReport, CoreError> {
        match self.classify()? {
            Tracked::Running(process) => {
                info!(pid = process.pid, "Stopping tracked process");
                let termination = self
                    .ports
                    .control
                    .terminate(process.pid, self.settings.shutdown_policy())
                    .await?;
                self.ports.pid_store.remove()?;
                info!(pid = process.pid, ?termination, "Stopped");
                Ok(StopReport::Stopped {
                    pid: process.pid,
                    termination,
                })
            }
            Tracked::Stale(pid) => {
                warn!(pid, "Process not found, removing stale PID file");
                self.ports.pid_store.remove()?;
                Ok(StopReport::StalePidFile { pid })
            }
            Tracked::Empty => {
                warn!("PID file is empty, removing it");
                self.ports.pid_store.remove()?;
                Ok(StopReport::EmptyPidFile)
            }
            Tracked::Invalid(contents) => {
                warn!(%contents, "PID file does not contain a process id, removing it");
                self.ports.pid_store.remove()?;
                Ok(StopReport::InvalidPidFile { contents })
            }
            Tracked::Untracked => Ok(self.stop_by_pattern().await),
        }
    }

    async fn stop_by_pattern(&self) -> StopReport {
        let pattern = self.pattern();
        let matches = self.ports.control.find_matching(pattern);

        if matches.is_empty() {
            debug!(%pattern, "No PID file and no matching process");
            return StopReport::NothingRunning;
        }

        info!(%pattern, count = matches.len(), "No PID file, stopping matching processes");

        let policy = self.settings.shutdown_policy();
        let mut stopped = Vec::new();
        let mut failed = Vec::new();

        for process in matches {
            match self.ports.control.terminate(process.pid, policy).await {
                Ok(termination) => stopped.push((process.pid, termination)),
                Err(e) => {
                    warn!(pid = process.pid, "Failed to stop matching process: {}", e);
                    failed.push((process.pid, e.to_string()));
                }
            }
        }

        StopReport::StoppedByName { stopped, failed }
    }

    /// Describe the tracked process without changing anything on disk.
    pub fn status(&self) -> Result<StatusReport, CoreError> {
        let state = match self.classify()? {
            Tracked::Running(process) => TrackedState::Running { process },
            Tracked::Stale(pid) => TrackedState::Stale { pid },
            Tracked::Empty => TrackedState::Empty,
            Tracked::Invalid(contents) => TrackedState::Invalid { contents },
            Tracked::Untracked => TrackedState::NotRunning {
                untracked: self.ports.control.find_matching(self.pattern()),
            },
        };

        Ok(StatusReport {
            pid_file: self.pid_file().to_path_buf(),
            pattern: self.pattern().to_string(),
            state,
        })
    }

    /// Stop whatever is running, then start a fresh process.
    ///
    /// Gives up with [`CoreError::RestartAborted`] when the stop leaves
    /// doubt about an old instance (unreadable PID file or a match that
    /// survived termination). Nothing is launched in that case.
    pub async fn restart(&self) -> Result<(StopReport, StartReport), CoreError> {
        let stopped = self.stop().await?;
        if stopped.needs_attention() {
            warn!(?stopped, "Previous instance not confirmed gone, skipping start");
            return Err(CoreError::RestartAborted { report: stopped });
        }
        let started = self.start().await?;
        Ok((stopped, started))
    }
}
