//! Stop command handler.

use anyhow::Result;

use super::{Outcome, print_lines};
use crate::bootstrap::CliContext;
use crate::presentation::stop_lines;

pub async fn execute(ctx: &CliContext) -> Result<Outcome> {
    let report = ctx.supervisor.stop().await?;
    print_lines(&stop_lines(&report, ctx.settings().effective_pattern()));
    Ok(Outcome::attention_if(report.needs_attention()))
}
