//! Liveness checks for the PID recorded in the PID file.

use crate::process::table;

/// Check if a PID exists (without verifying it's our process).
///
/// Uses `kill` with null signal which doesn't send a signal but checks existence.
#[cfg(unix)]
pub fn pid_exists(pid: u32) -> bool {
    use nix::sys::signal;
    use nix::unistd::Pid;

    let Ok(raw) = i32::try_from(pid) else {
        return false;
    };

    // Signal None is a special "null signal" that checks if we can signal the process
    match signal::kill(Pid::from_raw(raw), None) {
        Ok(()) => true,
        Err(nix::errno::Errno::ESRCH) => false, // No such process
        Err(_) => true,                         // Process exists but we lack permission
    }
}

#[cfg(not(unix))]
pub fn pid_exists(pid: u32) -> bool {
    table::is_listed_and_running(pid)
}

/// Check if a PID names a running process.
///
/// A terminated child that has not been reaped yet still answers the null
/// signal, so the process table is consulted to rule out zombies.
pub fn is_alive(pid: u32) -> bool {
    pid_exists(pid) && table::is_listed_and_running(pid)
}
