//! # Prompt Builder
//!
//! Building blocks for filling categorized text templates.
//!
//! ## Features
//!
//! - **Template Store**: list categories and templates from a
//!   `<root>/<category>/<name>.txt` directory tree
//! - **Placeholders**: extract `{{name}}` markers and substitute answers
//! - **Question Table**: tailored questions per template and placeholder,
//!   with a generic fallback
//! - **Suggestions**: keyword-based category suggestion from free-form intent
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prompt_builder::{extract_placeholders, substitute, QuestionTable, TemplateStore};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = TemplateStore::new("./templates");
//! let templates = store.list_templates("content_creation")?;
//! let template = &templates[0];
//! let text = store.read_template(template)?;
//!
//! let mut answers = HashMap::new();
//! for name in extract_placeholders(&text) {
//!     let question = QuestionTable::builtin().question_for(&template.id, &name);
//!     println!("{}", question);
//!     answers.insert(name, "example".to_string());
//! }
//!
//! println!("{}", substitute(&text, &answers));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Error types used throughout the library
pub mod error;

/// Placeholder extraction and substitution
pub mod placeholder;

/// Tailored questions per template and placeholder
pub mod questions;

/// Numbered menu parsing and retry policy
pub mod selection;

/// Category suggestion from free-form intent
pub mod suggest;

/// Directory-backed template store
pub mod store;

pub use error::{InvalidSelection, PromptBuilderError, Result};
pub use placeholder::{extract_placeholders, substitute};
pub use questions::QuestionTable;
pub use selection::{is_affirmative, parse_selection, RetryPolicy};
pub use store::{Category, Template, TemplateStore, TEMPLATE_EXTENSION};
pub use suggest::suggest_category;
