// crates/testbench-server/src/main.rs
// ============================================================================
// Module: Testbench Server Binary
// Description: CLI entrypoint for the traveller demo service.
// Purpose: Load configuration and run the server.
// Dependencies: clap, testbench-server, tokio
// ============================================================================

//! ## Overview
//! The binary exposes a single `serve` subcommand: load TOML configuration
//! (explicit path, `TESTBENCH_CONFIG`, or defaults), apply an optional bind
//! override, and run the server until the process is stopped. Startup
//! failures surface as a nonzero exit.

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use testbench_server::HelloServer;
use testbench_server::ServerConfig;
use testbench_server::ServerError;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "testbench-server", disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the traveller demo server.
    Serve(ServeCommand),
}

/// Arguments for the serve subcommand.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Bind address override.
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,
}

/// Parses the CLI and runs the selected command.
#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(command) => serve(command).await,
    }
}

/// Loads configuration, applies overrides, and serves.
async fn serve(command: ServeCommand) -> Result<(), ServerError> {
    let mut config = ServerConfig::load(command.config.as_deref())?;
    if let Some(bind) = command.bind {
        config.bind = bind;
        config.validate().map_err(ServerError::from)?;
    }
    let server = HelloServer::from_config(config)?;
    server.serve().await
}
