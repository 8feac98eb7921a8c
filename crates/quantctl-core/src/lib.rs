//! Core domain types, ports and the supervisor service for `quantctl`.
//!
//! `quantctl` keeps one background program (the trading loop) running,
//! tracks it with a PID file in the work root, and stops it with a
//! SIGTERM → SIGKILL escalation. This crate holds everything that does not
//! touch the operating system directly; `quantctl-runtime` supplies the
//! adapters.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

pub use domain::{StartReport, StatusReport, StopReport, TrackedState};
pub use paths::{PathError, ResolvedPaths};
pub use ports::{
    CoreError, Identity, LaunchSpec, LaunchedProcess, Launcher, PidFileState, PidStore,
    ProcessControl, ProcessError, ProcessInfo, ShutdownPolicy, Termination,
};
pub use services::{Supervisor, SupervisorPorts};
pub use settings::{Settings, SettingsError, SettingsUpdate, validate_settings};

// Silence unused dev-dependency warnings for test-only crates
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio as _;
