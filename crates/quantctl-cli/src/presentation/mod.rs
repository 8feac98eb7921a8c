//! Terminal output for supervisor reports.
//!
//! Format-only: every function turns a core report into lines for stdout.
//! Deciding exit codes is the handlers' job.

mod reports;

pub use reports::{format_started_at, start_lines, status_lines, stop_lines};
