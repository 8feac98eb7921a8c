//! Pure path resolver for testing and CLI introspection.
//!
//! Captures all resolved paths in one call so that `quantctl paths` and the
//! supervisor are guaranteed to agree on where things live.

use std::path::PathBuf;

use super::{PathError, env_file_path, logs_dir, pid_file_path, work_root};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory holding everything below
    pub work_root: PathBuf,
    /// PID file of the supervised program
    pub pid_file: PathBuf,
    /// Directory receiving the program's stdout/stderr
    pub logs_dir: PathBuf,
    /// `.env` file loaded before launch
    pub env_file: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve(pid_file_name: &str) -> Result<Self, PathError> {
        Ok(Self {
            work_root: work_root()?,
            pid_file: pid_file_path(pid_file_name)?,
            logs_dir: logs_dir()?,
            env_file: env_file_path()?,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "work_root = {}", self.work_root.display())?;
        writeln!(f, "pid_file = {}", self.pid_file.display())?;
        writeln!(f, "logs_dir = {}", self.logs_dir.display())?;
        write!(f, "env_file = {}", self.env_file.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::HomeOverride;
    use tempfile::tempdir;

    #[test]
    fn everything_lives_under_work_root() {
        let temp = tempdir().unwrap();
        let _home = HomeOverride::to(temp.path());

        let paths = ResolvedPaths::resolve("quant.pid").expect("resolve");
        assert_eq!(paths.work_root, temp.path());
        assert!(paths.pid_file.starts_with(&paths.work_root));
        assert!(paths.logs_dir.starts_with(&paths.work_root));
        assert!(paths.env_file.ends_with(".env"));
    }

    #[test]
    fn display_format_is_parseable() {
        let _home = HomeOverride::cleared();
        let paths = ResolvedPaths::resolve("quant.pid").expect("resolve");
        let output = paths.to_string();

        assert!(output.contains("work_root = "));
        assert!(output.contains("pid_file = "));
        assert!(output.contains("logs_dir = "));
        assert!(output.contains("env_file = "));
    }
}
