//! Exit code constants for the CLI
//!
//! Each session outcome has its own code so scripts can tell them apart:
//! - 0: Final prompt produced
//! - 1: No categories in the template store
//! - 2: No templates in the chosen category
//! - 3: Fatal error (store unavailable, template unreadable, input closed,
//!   retries exhausted)

/// Final prompt produced and printed
pub const EXIT_SUCCESS: i32 = 0;

/// The template store has no categories
pub const EXIT_NO_CATEGORIES: i32 = 1;

/// The chosen category has no templates
pub const EXIT_NO_TEMPLATES: i32 = 2;

/// Fatal error ending the run
pub const EXIT_FAILURE: i32 = 3;
