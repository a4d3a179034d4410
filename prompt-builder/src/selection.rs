//! Numbered menu input parsing and retry policy

use crate::error::InvalidSelection;

/// How many times a menu may re-prompt after invalid input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// Keep asking until a valid choice is entered
    #[default]
    Unbounded,
    /// Give up after this many attempts in total
    MaxAttempts(usize),
}

impl RetryPolicy {
    /// Build a policy from an optional attempt limit
    pub fn from_max_attempts(max_attempts: Option<usize>) -> Self {
        match max_attempts {
            Some(max) => Self::MaxAttempts(max),
            None => Self::Unbounded,
        }
    }

    /// Whether another attempt may follow `attempts` failed ones
    pub fn allows_another(&self, attempts: usize) -> bool {
        match self {
            Self::Unbounded => true,
            Self::MaxAttempts(max) => attempts < *max,
        }
    }
}

/// Parse a 1-based menu choice against a menu of `len` entries
///
/// Returns the 0-based index of the chosen entry.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, InvalidSelection> {
    let trimmed = input.trim();
    let choice: i64 = trimmed.parse().map_err(|_| InvalidSelection::NotANumber {
        input: trimmed.to_string(),
    })?;

    if choice >= 1 && (choice as u64) <= len as u64 {
        Ok(choice as usize - 1)
    } else {
        Err(InvalidSelection::OutOfRange { choice, max: len })
    }
}

/// Whether a yes/no answer means yes (`y` or `yes`, any case)
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
