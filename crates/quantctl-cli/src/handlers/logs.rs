//! Logs command handler.

use anyhow::{Context, Result};
use tracing::debug;

use quantctl_runtime::logfile::{latest_log, tail};

use super::Outcome;
use crate::bootstrap::CliContext;

/// Print the path and the last `lines` lines of the newest log file.
pub fn execute(ctx: &CliContext, lines: usize) -> Result<Outcome> {
    let dir = &ctx.paths.logs_dir;
    let base = &ctx.settings().log_name;

    let Some(path) = latest_log(dir, base)
        .with_context(|| format!("failed to list {}", dir.display()))?
    else {
        println!("No {base}.*.log files in {}", dir.display());
        return Ok(Outcome::Success);
    };

    debug!(path = %path.display(), lines, "Tailing log");
    let tail_lines =
        tail(&path, lines).with_context(|| format!("failed to read {}", path.display()))?;

    println!("==> {} <==", path.display());
    for line in tail_lines {
        println!("{line}");
    }
    Ok(Outcome::Success)
}
