//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use anyhow::Result;

use super::Outcome;
use crate::bootstrap::CliContext;

/// Print the resolved paths in `key = value` format.
///
/// Uses the same [`quantctl_core::ResolvedPaths`] the supervisor was built
/// with, so what is shown is exactly what `start` and `stop` touch.
pub fn execute(ctx: &CliContext) -> Result<Outcome> {
    println!("{}", ctx.paths);
    Ok(Outcome::Success)
}
