use std::path::Path;

use quantctl_core::{ResolvedPaths, Settings};

use crate::bootstrap::CliContext;

/// Context with default settings whose work root is `root`.
pub fn context_in(root: &Path) -> CliContext {
    let paths = ResolvedPaths {
        work_root: root.to_path_buf(),
        pid_file: root.join("quant.pid"),
        logs_dir: root.join("logs"),
        env_file: root.join(".env"),
    };
    CliContext::new(Settings::with_defaults(), paths)
}
