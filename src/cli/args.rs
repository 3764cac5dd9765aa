//! CLI argument definitions using clap
//!
//! Commands:
//! - coursedb serve [--host H] [--port P] [--log-level L]
//! - coursedb schema

use clap::{Parser, Subcommand};

/// coursedb - an in-memory course-catalog query/mutation API server
#[derive(Parser, Debug)]
#[command(name = "coursedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the course-catalog HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "4000")]
        port: u16,

        /// Log level (trace, debug, info, warn, error)
        #[arg(long, default_value = "info")]
        log_level: String,
    },

    /// Print the served schema as JSON and exit
    Schema,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
