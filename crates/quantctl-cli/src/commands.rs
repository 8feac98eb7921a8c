//! Available subcommands.

use clap::Subcommand;

/// Lifecycle and inspection commands for the supervised program.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Launch the program in the background and record its PID
    Start,

    /// Stop the program (SIGTERM, then SIGKILL after the grace period)
    Stop,

    /// Show whether the program is running
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },

    /// Stop the program if it is running, then start it again
    Restart,

    /// Show the newest log file
    Logs {
        /// Number of trailing lines to print
        #[arg(short = 'n', long = "lines", default_value_t = 20)]
        lines: usize,
    },

    /// Show resolved paths (work root, PID file, logs, .env)
    Paths,

    /// Show the effective settings as JSON
    Config,
}
