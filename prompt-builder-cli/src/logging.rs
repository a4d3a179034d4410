//! Logging setup
//!
//! Logs always go to stderr so they never mix into the prompt written to
//! stdout. The default level is WARN to keep interactive sessions clean.

use crate::cli::Cli;
use is_terminal::IsTerminal;
use tracing::Level;

/// Choose the log level from the verbosity flags
///
/// `--quiet` wins over the others, then `--debug`, then `--verbose`.
pub fn log_level(cli: &Cli) -> Level {
    if cli.quiet {
        Level::ERROR
    } else if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::TRACE
    } else {
        Level::WARN
    }
}

/// Install the global stderr subscriber
pub fn init(level: Level) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
