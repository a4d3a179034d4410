//! Error handling for the prompt builder CLI
//!
//! Errors keep their source chain and carry the exit code the process should
//! end with.

use crate::exit_codes::EXIT_FAILURE;
use std::error::Error;
use std::fmt;

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Create a new CLI error with a message and exit code
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a fatal CLI error from an `anyhow` error, keeping its chain
    pub fn fatal(error: anyhow::Error) -> Self {
        let message = error.to_string();
        Self {
            source: Some(error.into()),
            ..Self::new(message, EXIT_FAILURE)
        }
    }

    /// Get the full error chain as a formatted string
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();

        let mut current_source = self.source();
        while let Some(err) = current_source {
            let text = err.to_string();
            // A boxed anyhow error repeats the top-level message
            if text != self.message {
                result.push_str(&format!("\n  Caused by: {}", text));
            }
            current_source = err.source();
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

/// Convert a CliResult carrying an exit code to that code, printing the full
/// error chain on failure
pub fn handle_cli_result(result: CliResult<i32>) -> i32 {
    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!("Exiting with code {}", e.exit_code);
            eprintln!("Error: {}", e.full_chain());
            e.exit_code
        }
    }
}
