//! CLI-specific error types
//!
//! Every CLI error is terminal: main prints it and exits non-zero.

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Building the async runtime failed
    #[error("COURSEDB_CLI_RUNTIME_ERROR: {0}")]
    Runtime(String),

    /// Binding or serving the HTTP listener failed
    #[error("COURSEDB_CLI_SERVER_ERROR: {0}")]
    Server(String),
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Server(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code_and_message() {
        let err = CliError::Server("address in use".to_string());
        let text = err.to_string();
        assert!(text.contains("COURSEDB_CLI_SERVER_ERROR"));
        assert!(text.contains("address in use"));
    }
}
