//! CLI module for coursedb
//!
//! Provides the command-line interface:
//! - serve: start the HTTP server
//! - schema: print the served schema JSON and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
