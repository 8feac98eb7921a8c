//! Status command handler.

use anyhow::Result;
use quantctl_core::TrackedState;

use super::{Outcome, print_lines};
use crate::bootstrap::CliContext;
use crate::presentation::status_lines;

/// Print the tracked state without touching the PID file.
pub fn execute(ctx: &CliContext, json: bool) -> Result<Outcome> {
    let report = ctx.supervisor.status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_lines(&status_lines(&report));
    }

    Ok(Outcome::attention_if(matches!(
        report.state,
        TrackedState::Empty | TrackedState::Invalid { .. }
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context_in;
    use tempfile::tempdir;

    #[test]
    fn empty_pid_file_needs_attention() {
        let dir = tempdir().unwrap();
        let ctx = context_in(dir.path());
        std::fs::write(&ctx.paths.pid_file, "\n").unwrap();

        assert_eq!(execute(&ctx, false).unwrap(), Outcome::NeedsAttention);
        assert!(ctx.paths.pid_file.exists());
    }

    #[test]
    fn malformed_pid_file_needs_attention_in_json_mode_too() {
        let dir = tempdir().unwrap();
        let ctx = context_in(dir.path());
        std::fs::write(&ctx.paths.pid_file, "python main.py\n").unwrap();

        assert_eq!(execute(&ctx, true).unwrap(), Outcome::NeedsAttention);
        assert!(ctx.paths.pid_file.exists());
    }

    #[test]
    fn dead_pid_is_reported_without_attention() {
        let dir = tempdir().unwrap();
        let ctx = context_in(dir.path());
        std::fs::write(&ctx.paths.pid_file, "99999999\n").unwrap();

        assert_eq!(execute(&ctx, false).unwrap(), Outcome::Success);
    }
}
