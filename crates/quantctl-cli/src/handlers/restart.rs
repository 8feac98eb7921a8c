//! Restart command handler.

use anyhow::Result;
use quantctl_core::CoreError;

use super::{Outcome, print_lines};
use crate::bootstrap::CliContext;
use crate::presentation::{start_lines, stop_lines};

/// Stop whatever runs, then start fresh.
///
/// When the stop cannot confirm the old instance is gone, the stop output
/// is shown, nothing is launched and the command exits 1.
pub async fn execute(ctx: &CliContext) -> Result<Outcome> {
    let pattern = ctx.settings().effective_pattern();

    match ctx.supervisor.restart().await {
        Ok((stopped, started)) => {
            print_lines(&stop_lines(&stopped, pattern));
            print_lines(&start_lines(&started));
            Ok(Outcome::Success)
        }
        Err(CoreError::RestartAborted { report }) => {
            print_lines(&stop_lines(&report, pattern));
            println!("{}", CoreError::RestartAborted { report });
            Ok(Outcome::NeedsAttention)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context_in;
    use tempfile::tempdir;

    #[tokio::test]
    async fn empty_pid_file_blocks_the_new_launch() {
        let dir = tempdir().unwrap();
        let ctx = context_in(dir.path());
        std::fs::write(&ctx.paths.pid_file, "").unwrap();

        let outcome = execute(&ctx).await.unwrap();

        assert_eq!(outcome, Outcome::NeedsAttention);
        assert!(!ctx.paths.pid_file.exists());
        assert!(!ctx.paths.logs_dir.exists());
    }
}
