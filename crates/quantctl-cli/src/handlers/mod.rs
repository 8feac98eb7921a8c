//! Command handlers that delegate to the supervisor.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<Outcome>`
//! - Thin wrappers that:
//!   1. Call the supervisor (or a runtime helper)
//!   2. Print the result via `presentation`
//!   3. Report whether the user needs to look at something
//!
//! Hard failures travel as errors and are mapped to exit codes in `main`.

pub mod config;
pub mod logs;
pub mod paths;
pub mod restart;
pub mod start;
pub mod status;
pub mod stop;

#[cfg(test)]
mod test_support;

/// How a command that did not error should exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything went as expected.
    Success,
    /// The command ran but left something for the user to check.
    NeedsAttention,
}

impl Outcome {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::NeedsAttention => 1,
        }
    }

    pub(crate) const fn attention_if(flag: bool) -> Self {
        if flag { Self::NeedsAttention } else { Self::Success }
    }
}

pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
