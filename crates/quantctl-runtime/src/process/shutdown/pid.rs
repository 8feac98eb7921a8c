//! Terminate a process by PID without reaping (no Child handle available).

use std::io;

use quantctl_core::{ShutdownPolicy, Termination};

#[cfg(unix)]
use std::time::Duration;
#[cfg(unix)]
use tokio::time::{Instant, sleep};
#[cfg(unix)]
use tracing::debug;

#[cfg(unix)]
use nix::errno::Errno;
#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;

#[cfg(unix)]
use crate::pidfile::is_alive;

/// Kill a process by PID with SIGTERM → SIGKILL escalation.
///
/// # Strategy
/// 1. Send SIGTERM
/// 2. Poll until `policy.grace_period` elapses to verify process exit
/// 3. If still alive, send SIGKILL
/// 4. Poll again until `policy.kill_timeout` elapses
///
/// The process is never reaped here; when it is our own child the caller
/// owns that. Zombies count as exited.
///
/// # Returns
/// - `Ok(Termination)` describing which phase ended the process
/// - `Err` if signalling fails (excluding ESRCH) or the process outlives SIGKILL
pub async fn kill_pid(pid: u32, policy: ShutdownPolicy) -> io::Result<Termination> {
    #[cfg(unix)]
    {
        kill_pid_unix(pid, policy).await
    }

    #[cfg(not(unix))]
    {
        kill_pid_windows(pid, policy).await
    }
}

#[cfg(unix)]
async fn kill_pid_unix(pid: u32, policy: ShutdownPolicy) -> io::Result<Termination> {
    let raw = i32::try_from(pid)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, format!("invalid pid {pid}")))?;
    let nix_pid = Pid::from_raw(raw);

    if !is_alive(pid) {
        return Ok(Termination::AlreadyExited);
    }

    // Phase 1: SIGTERM
    if !send(nix_pid, Signal::SIGTERM)? {
        return Ok(Termination::AlreadyExited);
    }

    if wait_for_exit(pid, policy.grace_period, policy.poll_interval).await {
        return Ok(Termination::Graceful);
    }

    // Phase 2: SIGKILL. ESRCH here means it exited after the last poll.
    if !send(nix_pid, Signal::SIGKILL)? {
        return Ok(Termination::AlreadyExited);
    }

    if wait_for_exit(pid, policy.kill_timeout, policy.poll_interval).await {
        return Ok(Termination::Forced);
    }

    // If we get here, process didn't exit even after SIGKILL (rare)
    Err(io::Error::new(
        io::ErrorKind::TimedOut,
        format!("process {pid} did not exit after SIGKILL"),
    ))
}

/// Send `sig`. `Ok(false)` means the process no longer exists.
#[cfg(unix)]
fn send(pid: Pid, sig: Signal) -> io::Result<bool> {
    match signal::kill(pid, sig) {
        Ok(()) => {
            debug!(pid = pid.as_raw(), signal = ?sig, "Sent signal");
            Ok(true)
        }
        Err(Errno::ESRCH) => Ok(false),
        Err(e) => Err(io::Error::other(e)),
    }
}

/// Poll until `pid` is gone or `limit` elapses. Returns whether it exited.
///
/// A limit too large to represent as an `Instant` means waiting forever.
#[cfg(unix)]
async fn wait_for_exit(pid: u32, limit: Duration, interval: Duration) -> bool {
    let deadline = Instant::now().checked_add(limit);
    loop {
        sleep(interval).await;

        if !is_alive(pid) {
            return true;
        }

        if deadline.is_some_and(|d| Instant::now() >= d) {
            return false;
        }
    }
}

#[cfg(not(unix))]
async fn kill_pid_windows(_pid: u32, _policy: ShutdownPolicy) -> io::Result<Termination> {
    // No SIGTERM equivalent; the supervisor is primarily a Linux/macOS tool
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "signal-based termination is not implemented on Windows",
    ))
}
