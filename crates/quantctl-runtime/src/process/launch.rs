//! Background launch of the supervised program.
//!
//! The child gets its own process group, a null stdin, and a fresh log file
//! for stdout and stderr. It is never killed when the handle drops, so it
//! keeps running after the CLI exits.

use std::process::Stdio;

use async_trait::async_trait;
use quantctl_core::ports::{LaunchSpec, LaunchedProcess, Launcher, ProcessError};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::logfile::open_log_file;

/// [`Launcher`] that detaches the child from the caller's session.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedLauncher;

impl DetachedLauncher {
    pub const fn new() -> Self {
        Self
    }

    fn build_command(spec: &LaunchSpec) -> Result<(Command, std::path::PathBuf), ProcessError> {
        let (log_path, stdout) = open_log_file(&spec.log_dir, &spec.log_name).map_err(|e| {
            ProcessError::StartFailed(format!(
                "cannot open log file in {}: {e}",
                spec.log_dir.display()
            ))
        })?;
        let stderr = stdout
            .try_clone()
            .map_err(|e| ProcessError::StartFailed(format!("cannot share log file: {e}")))?;

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .current_dir(&spec.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .kill_on_drop(false);

        #[cfg(unix)]
        cmd.process_group(0);

        Ok((cmd, log_path))
    }
}

#[async_trait]
impl Launcher for DetachedLauncher {
    async fn launch(&self, spec: &LaunchSpec) -> Result<LaunchedProcess, ProcessError> {
        let (mut cmd, log_path) = Self::build_command(spec)?;

        debug!(command = %spec.display_command(), log = %log_path.display(), "Spawning");

        let mut child = cmd.spawn().map_err(|e| {
            ProcessError::StartFailed(format!("failed to spawn {}: {e}", spec.program))
        })?;

        let pid = child
            .id()
            .ok_or_else(|| ProcessError::StartFailed("child exited before reporting a pid".into()))?;

        if !spec.startup_check.is_zero() {
            tokio::time::sleep(spec.startup_check).await;
            match child.try_wait() {
                Ok(Some(status)) => {
                    warn!(pid, %status, "Process exited during startup");
                    return Err(ProcessError::StartFailed(format!(
                        "{} exited during startup ({status}); see {}",
                        spec.display_command(),
                        log_path.display()
                    )));
                }
                Ok(None) => {}
                Err(e) => {
                    return Err(ProcessError::StartFailed(format!(
                        "cannot poll child {pid}: {e}"
                    )));
                }
            }
        }

        info!(pid, log = %log_path.display(), "Launched {}", spec.display_command());
        drop(child);

        Ok(LaunchedProcess { pid, log_path })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    use crate::process::shutdown::kill_pid;
    use quantctl_core::ports::ShutdownPolicy;

    fn spec(dir: &std::path::Path, script: &str) -> LaunchSpec {
        LaunchSpec::new(
            "sh",
            vec!["-c".into(), script.into()],
            dir,
            dir.join("logs"),
            "trade",
        )
        .with_startup_check(Duration::from_millis(300))
    }

    #[tokio::test]
    async fn launch_writes_output_to_log_file() {
        let dir = tempdir().unwrap();
        let launched = DetachedLauncher::new()
            .launch(&spec(dir.path(), "echo hello; sleep 30"))
            .await
            .unwrap();

        assert!(launched.pid > 0);
        assert!(launched.log_path.starts_with(dir.path().join("logs")));
        let contents = std::fs::read_to_string(&launched.log_path).unwrap();
        assert!(contents.contains("hello"));

        let policy = ShutdownPolicy::new(Duration::from_secs(2), Duration::from_secs(2));
        kill_pid(launched.pid, policy).await.unwrap();
    }

    #[tokio::test]
    async fn early_exit_is_reported_as_start_failure() {
        let dir = tempdir().unwrap();
        let err = DetachedLauncher::new()
            .launch(&spec(dir.path(), "echo boom >&2; exit 3"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProcessError::StartFailed(ref msg) if msg.contains("during startup")));
    }

    #[tokio::test]
    async fn missing_program_fails_to_spawn() {
        let dir = tempdir().unwrap();
        let mut bad = spec(dir.path(), "true");
        bad.program = "quantctl-definitely-not-a-program".into();

        let err = DetachedLauncher::new().launch(&bad).await.unwrap_err();
        assert!(matches!(err, ProcessError::StartFailed(ref msg) if msg.contains("spawn")));
    }
}
