//! Config command handler.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use quantctl_core::Settings;

use super::Outcome;
use crate::bootstrap::CliContext;

#[derive(Debug, Serialize)]
struct EffectiveConfig<'a> {
    #[serde(flatten)]
    settings: &'a Settings,
    effective_pattern: &'a str,
    work_root: &'a Path,
    env_file: &'a Path,
    env_file_present: bool,
}

/// Print the merged settings as pretty JSON.
pub fn execute(ctx: &CliContext) -> Result<Outcome> {
    let settings = ctx.settings();
    let view = EffectiveConfig {
        settings,
        effective_pattern: settings.effective_pattern(),
        work_root: &ctx.paths.work_root,
        env_file: &ctx.paths.env_file,
        env_file_present: ctx.paths.env_file.is_file(),
    };
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(Outcome::Success)
}
