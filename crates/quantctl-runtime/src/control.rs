//! [`ProcessControl`] backed by the live process table and Unix signals.

use async_trait::async_trait;
use quantctl_core::ports::{ProcessControl, ProcessError, ProcessInfo, ShutdownPolicy, Termination};
use tracing::debug;

use crate::pidfile::is_alive;
use crate::process::{kill_pid, table};

/// Inspects and terminates real OS processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessControl;

impl SystemProcessControl {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessControl for SystemProcessControl {
    fn inspect(&self, pid: u32) -> Option<ProcessInfo> {
        if !is_alive(pid) {
            return None;
        }
        table::lookup(pid)
    }

    fn find_matching(&self, pattern: &str) -> Vec<ProcessInfo> {
        let found = table::find_matching(pattern);
        debug!(pattern, count = found.len(), "Scanned process table");
        found
    }

    async fn terminate(
        &self,
        pid: u32,
        policy: ShutdownPolicy,
    ) -> Result<Termination, ProcessError> {
        kill_pid(pid, policy)
            .await
            .map_err(|e| ProcessError::StopFailed(format!("PID {pid}: {e}")))
    }
}
