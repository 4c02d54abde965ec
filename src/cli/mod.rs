//! CLI module
//!
//! Provides the command-line interface:
//! - serve: load config and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
