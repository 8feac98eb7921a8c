//! Atomic PID file I/O operations.
//!
//! Format: single-line text file
//! ```text
//! <pid>
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use quantctl_core::{PidFileState, PidStore, ProcessError};
use tracing::debug;

/// Write PID file atomically using temp file + rename.
///
/// # Atomicity
/// 1. Write to `<name>.tmp`
/// 2. Rename to `<name>` (atomic on Unix/macOS)
pub fn write_pidfile(path: &Path, pid: u32) -> io::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, format!("{pid}\n"))?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read and classify PID file content.
pub fn read_pidfile(path: &Path) -> io::Result<PidFileState> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(parse_pidfile_content(&content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PidFileState::Missing),
        Err(e) => Err(e),
    }
}

/// Delete PID file (idempotent - no error if missing).
pub fn delete_pidfile(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn parse_pidfile_content(content: &str) -> PidFileState {
    let Some(first) = content.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return PidFileState::Empty;
    };

    match first.parse::<u32>() {
        Ok(pid) if pid > 0 => PidFileState::Pid(pid),
        _ => PidFileState::Invalid(first.to_string()),
    }
}

/// [`PidStore`] backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FilePidStore {
    path: PathBuf,
}

impl FilePidStore {
    /// Track the PID file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn pidfile_error(action: &str, path: &Path, e: &io::Error) -> ProcessError {
    ProcessError::PidFile(format!("failed to {action} {}: {e}", path.display()))
}

impl PidStore for FilePidStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<PidFileState, ProcessError> {
        read_pidfile(&self.path).map_err(|e| pidfile_error("read", &self.path, &e))
    }

    fn write(&self, pid: u32) -> Result<(), ProcessError> {
        write_pidfile(&self.path, pid).map_err(|e| pidfile_error("write", &self.path, &e))?;
        debug!(pid, path = %self.path.display(), "Wrote PID file");
        Ok(())
    }

    fn remove(&self) -> Result<(), ProcessError> {
        delete_pidfile(&self.path).map_err(|e| pidfile_error("remove", &self.path, &e))?;
        debug!(path = %self.path.display(), "Removed PID file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_read_delete() {
        let dir = tempdir().unwrap();
        let store = FilePidStore::new(dir.path().join("quant.pid"));

        assert_eq!(store.read().unwrap(), PidFileState::Missing);

        store.write(98765).expect("write failed");
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "98765\n",
            "file holds the bare pid"
        );
        assert_eq!(store.read().unwrap(), PidFileState::Pid(98765));
        assert!(!dir.path().join("quant.pid.tmp").exists());

        store.remove().expect("delete failed");
        assert!(!store.path().exists());

        // Second delete should be idempotent
        store.remove().expect("second delete failed");
    }

    #[test]
    fn overwrite_replaces_previous_pid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quant.pid");

        write_pidfile(&path, 1).unwrap();
        write_pidfile(&path, 2).unwrap();

        assert_eq!(read_pidfile(&path).unwrap(), PidFileState::Pid(2));
    }

    #[test]
    fn classifies_empty_and_malformed_content() {
        assert_eq!(parse_pidfile_content(""), PidFileState::Empty);
        assert_eq!(parse_pidfile_content("  \n\n"), PidFileState::Empty);
        assert_eq!(parse_pidfile_content(" 1234 \n"), PidFileState::Pid(1234));
        assert_eq!(
            parse_pidfile_content("python\n"),
            PidFileState::Invalid("python".into())
        );
        assert_eq!(parse_pidfile_content("0"), PidFileState::Invalid("0".into()));
        assert_eq!(
            parse_pidfile_content("-5"),
            PidFileState::Invalid("-5".into())
        );
    }
}
