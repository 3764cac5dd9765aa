//! CLI command implementations
//!
//! `serve` initializes tracing, builds the tokio runtime, and blocks on
//! the HTTP server until shutdown. `schema` prints the served schema and
//! exits without touching the network.

use tracing_subscriber::EnvFilter;

use crate::schema::ApiSchema;
use crate::server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a single command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            host,
            port,
            log_level,
        } => serve(host, port, &log_level),
        Command::Schema => schema(),
    }
}

fn serve(host: String, port: u16, log_level: &str) -> CliResult<()> {
    init_tracing(log_level);

    let config = HttpServerConfig {
        host,
        port,
        ..Default::default()
    };
    let server = HttpServer::with_config(config);

    let runtime = tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;
    runtime.block_on(server.start())?;

    Ok(())
}

fn schema() -> CliResult<()> {
    println!("{}", ApiSchema::catalog().to_json_pretty());
    Ok(())
}

/// Install the global tracing subscriber. RUST_LOG overrides --log-level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
