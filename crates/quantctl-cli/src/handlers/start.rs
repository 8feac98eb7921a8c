//! Start command handler.

use anyhow::Result;
use quantctl_core::CoreError;

use super::{Outcome, print_lines};
use crate::bootstrap::CliContext;
use crate::presentation::start_lines;

/// Launch the program unless a live one is already tracked.
///
/// A refused start is not an error: it prints the running PID and exits 1.
pub async fn execute(ctx: &CliContext) -> Result<Outcome> {
    match ctx.supervisor.start().await {
        Ok(report) => {
            print_lines(&start_lines(&report));
            Ok(Outcome::Success)
        }
        Err(err @ CoreError::AlreadyRunning { .. }) => {
            println!("{err}");
            Ok(Outcome::NeedsAttention)
        }
        Err(err) => Err(err.into()),
    }
}
