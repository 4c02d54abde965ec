//! CLI command dispatch
//!
//! `run` parses arguments and executes the selected command. `serve` loads
//! the server configuration, builds a tokio runtime, and blocks on the HTTP
//! server until it exits.

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Execute a parsed command.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Load configuration and serve HTTP until shutdown.
pub fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port_override {
        config.port = port;
    }

    Logger::info(
        "serve_start",
        &[
            ("addr", &config.socket_addr()),
            ("config", &config_path.display().to_string()),
        ],
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("server error: {}", e)))
}

/// Read the JSON config file, falling back to defaults when it is absent.
///
/// A file that exists but fails to parse is a hard error, not a fallback.
fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    if !path.exists() {
        return Ok(HttpServerConfig::default());
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("read {}: {}", path.display(), e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| CliError::config_error(format!("parse {}: {}", path.display(), e)))
}
