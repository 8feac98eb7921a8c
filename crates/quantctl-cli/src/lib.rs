//! Command-line adapter for `quantctl`.
//!
//! `main.rs` parses [`Cli`], builds a [`CliContext`] through [`bootstrap`]
//! and hands it to one of the [`handlers`]. Exit codes come from
//! [`handlers::Outcome`] on success and [`error::exit_code_for`] on failure.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;

// Used only by the binary target
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::{CliError, exit_code_for};
pub use handlers::Outcome;
pub use parser::Cli;
