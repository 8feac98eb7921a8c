//! Main CLI parser and top-level argument handling.
//!
//! Every option describing the supervised program is global and can also be
//! set through a `QUANTCTL_*` environment variable (including ones loaded
//! from the work root's `.env`). Flags win over the environment. The work
//! root itself comes from `QUANTCTL_HOME` or the current directory.

use clap::Parser;

use crate::commands::Commands;

/// Start, stop and inspect the background trading program.
#[derive(Parser, Debug)]
#[command(name = "quantctl")]
#[command(about = "Supervise the background quant trading program via a PID file")]
#[command(version)]
pub struct Cli {
    /// Executable to launch
    #[arg(long, env = "QUANTCTL_PROGRAM", global = true)]
    pub program: Option<String>,

    /// Argument for the program (repeat for several)
    ///
    /// Values are split on commas, both here and in the env var, so an
    /// argument cannot itself contain a comma.
    #[arg(
        long = "arg",
        env = "QUANTCTL_ARGS",
        value_delimiter = ',',
        allow_hyphen_values = true,
        global = true
    )]
    pub args: Vec<String>,

    /// Command-line substring identifying the program [default: last argument]
    #[arg(long, env = "QUANTCTL_PATTERN", global = true)]
    pub pattern: Option<String>,

    /// PID file name inside the work root [default: quant.pid]
    #[arg(long = "pid-file", env = "QUANTCTL_PID_FILE", global = true)]
    pub pid_file: Option<String>,

    /// Base name of log files [default: trade]
    #[arg(long = "log-name", env = "QUANTCTL_LOG_NAME", global = true)]
    pub log_name: Option<String>,

    /// Seconds to wait after SIGTERM before sending SIGKILL [default: 10]
    #[arg(long = "grace-period", env = "QUANTCTL_GRACE_PERIOD", global = true)]
    pub grace_period: Option<u64>,

    /// Seconds to wait after SIGKILL before giving up [default: 2]
    #[arg(long = "kill-timeout", env = "QUANTCTL_KILL_TIMEOUT", global = true)]
    pub kill_timeout: Option<u64>,

    /// Milliseconds to watch a fresh process for an early exit, 0 disables [default: 1000]
    #[arg(long = "startup-check-ms", env = "QUANTCTL_STARTUP_CHECK_MS", global = true)]
    pub startup_check_ms: Option<u64>,

    /// Trust the PID file even if the process command line does not match the pattern
    #[arg(long = "no-verify-identity", env = "QUANTCTL_NO_VERIFY_IDENTITY", global = true)]
    pub no_verify_identity: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", env = "QUANTCTL_VERBOSE", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
