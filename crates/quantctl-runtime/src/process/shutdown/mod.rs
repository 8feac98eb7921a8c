//! Graceful process shutdown for the supervised program.
//!
//! The supervisor never holds a `Child` handle across invocations (`start`
//! and `stop` are separate commands), so termination is PID-based.

mod pid;

pub use pid::kill_pid;
