//! Operating-system adapters for `quantctl`.
//!
//! Implements the ports declared in `quantctl-core`:
//!
//! - [`FilePidStore`]: the on-disk PID file ([`quantctl_core::PidStore`])
//! - [`SystemProcessControl`]: process table lookups and SIGTERM/SIGKILL
//!   escalation ([`quantctl_core::ProcessControl`])
//! - [`DetachedLauncher`]: background launch with output sent to a
//!   timestamped log file ([`quantctl_core::Launcher`])
//!
//! [`logfile`] also backs the `logs` command.
#![deny(unsafe_code)]

mod control;
pub mod logfile;
pub mod pidfile;
pub mod process;

pub use control::SystemProcessControl;
pub use pidfile::FilePidStore;
pub use process::{DetachedLauncher, kill_pid};

use std::sync::Arc;

use quantctl_core::{ResolvedPaths, SupervisorPorts};

/// Wire the real adapters for a resolved set of paths.
pub fn system_ports(paths: &ResolvedPaths) -> SupervisorPorts {
    SupervisorPorts::new(
        Arc::new(FilePidStore::new(paths.pid_file.clone())),
        Arc::new(SystemProcessControl::new()),
        Arc::new(DetachedLauncher::new()),
    )
}
