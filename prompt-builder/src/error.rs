//! Unified error handling for the prompt builder library
//!
//! Filesystem failures are fatal and carry the path that failed. Menu input
//! failures are recoverable and are reported back to the user verbatim.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the prompt builder library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PromptBuilderError {
    /// The template root or a category directory cannot be listed
    #[error("Template store unavailable at {path}: {source}")]
    StoreUnavailable {
        /// Directory that could not be listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A template file cannot be read
    #[error("Template {path} could not be read: {source}")]
    TemplateUnreadable {
        /// Template file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl PromptBuilderError {
    pub(crate) fn store_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::StoreUnavailable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn template_unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::TemplateUnreadable {
            path: path.into(),
            source,
        }
    }
}

/// A menu choice that does not name an entry in the list
///
/// The display text is the message shown before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelection {
    /// Input was not a whole number
    #[error("Invalid input. Please enter a number.")]
    NotANumber {
        /// The rejected input, trimmed
        input: String,
    },

    /// Input was a number outside `1..=max`
    #[error("Invalid choice. Please enter a number from the list.")]
    OutOfRange {
        /// The number that was entered
        choice: i64,
        /// Number of entries in the menu
        max: usize,
    },
}

/// Result type alias for prompt builder operations
pub type Result<T> = std::result::Result<T, PromptBuilderError>;
