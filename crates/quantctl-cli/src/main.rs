//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, wires the supervisor via bootstrap and
//! dispatches to a handler. The process exit code comes from the handler's
//! [`Outcome`] or from the error it returned.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use quantctl_cli::{Cli, CliConfig, Commands, Outcome, bootstrap, exit_code_for, handlers};
use quantctl_core::paths::env_file_path;

const VERBOSE_FILTER: &str = "warn,quantctl_core=debug,quantctl_runtime=debug,quantctl_cli=debug";

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { VERBOSE_FILTER } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load API keys and `QUANTCTL_*` overrides before clap reads the environment.
///
/// Existing variables are never overwritten. The launched program inherits
/// whatever ends up in the environment.
fn load_env() {
    match env_file_path() {
        Ok(path) if path.is_file() => {
            if let Err(e) = dotenvy::from_path(&path) {
                eprintln!("Warning: failed to load {}: {e}", path.display());
            }
        }
        _ => {
            dotenvy::dotenv().ok();
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(Outcome::Success);
    };

    let ctx = bootstrap(&CliConfig::from_cli(&cli))?;

    match command {
        Commands::Start => handlers::start::execute(&ctx).await,
        Commands::Stop => handlers::stop::execute(&ctx).await,
        Commands::Status { json } => handlers::status::execute(&ctx, json),
        Commands::Restart => handlers::restart::execute(&ctx).await,
        Commands::Logs { lines } => handlers::logs::execute(&ctx, lines),
        Commands::Paths => handlers::paths::execute(&ctx),
        Commands::Config => handlers::config::execute(&ctx),
    }
}

#[tokio::main]
async fn main() {
    load_env();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    };

    std::process::exit(code);
}
