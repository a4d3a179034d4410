//! Prompt Builder CLI Library
//!
//! Command-line interface definitions, the console abstraction, the
//! interactive session, and exit codes.

/// Command-line interface definitions and argument parsing
pub mod cli;
/// Line-oriented and terminal consoles
pub mod console;
/// CLI error type carrying an exit code
pub mod error;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Log level selection and subscriber setup
pub mod logging;
/// The interactive prompt-building session
pub mod session;
