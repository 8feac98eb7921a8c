//! PID file management for tracking the supervised program.
//!
//! # Safety guarantees
//! - Atomic writes via temp file + rename
//! - Zombie-aware liveness checks (a dead, unreaped child is not "running")

mod io;
mod verify;

pub use io::{FilePidStore, delete_pidfile, read_pidfile, write_pidfile};
pub use verify::{is_alive, pid_exists};
