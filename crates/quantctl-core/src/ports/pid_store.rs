//! PID file storage port.
//!
//! The supervisor only needs to know what the PID file currently says and to
//! replace or delete it. Where the file lives and how it is written
//! atomically are adapter concerns.

use std::path::Path;

use super::ProcessError;

/// What the PID file currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PidFileState {
    /// No PID file exists.
    Missing,
    /// The file exists but is empty (or whitespace only).
    Empty,
    /// The file exists but its first line is not a process id.
    Invalid(String),
    /// The file names a process id.
    Pid(u32),
}

/// Persistent record of the supervised process id.
pub trait PidStore: Send + Sync {
    /// Location of the underlying file, for user-facing messages.
    fn path(&self) -> &Path;

    /// Read and classify the current contents.
    fn read(&self) -> Result<PidFileState, ProcessError>;

    /// Replace the contents with `pid`.
    fn write(&self, pid: u32) -> Result<(), ProcessError>;

    /// Delete the record. Succeeds if it is already gone.
    fn remove(&self) -> Result<(), ProcessError>;
}
