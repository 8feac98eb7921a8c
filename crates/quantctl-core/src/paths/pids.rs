//! PID file path resolution.

use std::path::{MAIN_SEPARATOR, PathBuf};

use super::error::PathError;
use super::platform::work_root;

/// Default name of the PID file.
pub const DEFAULT_PID_FILE: &str = "quant.pid";

/// Returns the location of the PID file for the supervised program.
///
/// Location: `<work_root>/<name>`. The name must be a bare file name.
pub fn pid_file_path(name: &str) -> Result<PathBuf, PathError> {
    check_file_name(name)?;
    Ok(work_root()?.join(name))
}

pub(crate) fn check_file_name(name: &str) -> Result<(), PathError> {
    if name.trim().is_empty() {
        return Err(PathError::EmptyPath);
    }
    if name.contains('/') || name.contains(MAIN_SEPARATOR) || name == "." || name == ".." {
        return Err(PathError::NotAFileName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::HomeOverride;
    use tempfile::tempdir;

    #[test]
    fn pid_file_is_under_work_root() {
        let temp = tempdir().unwrap();
        let _home = HomeOverride::to(temp.path());

        let path = pid_file_path(DEFAULT_PID_FILE).unwrap();
        assert_eq!(path, temp.path().join("quant.pid"));
    }

    #[test]
    fn rejects_paths_and_empty_names() {
        assert!(matches!(pid_file_path(""), Err(PathError::EmptyPath)));
        assert!(matches!(
            pid_file_path("run/quant.pid"),
            Err(PathError::NotAFileName(_))
        ));
        assert!(matches!(pid_file_path(".."), Err(PathError::NotAFileName(_))));
    }
}
