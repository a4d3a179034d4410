//! Placeholder extraction and substitution
//!
//! A placeholder is `{{name}}` where `name` is one or more characters other
//! than `}`. The name is opaque: `{{ topic }}` and `{{topic}}` are different
//! placeholders. Substitution is literal and single-pass.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("Invalid placeholder pattern"));

/// Format the marker for a placeholder name, e.g. `topic` -> `{{topic}}`
pub fn marker(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

/// Find the distinct placeholder names in `text`, in order of first
/// occurrence
pub fn extract_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for cap in PLACEHOLDER_RE.captures_iter(text) {
        let name = &cap[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Replace every answered placeholder marker in `text` with its answer
///
/// Markers without an answer are left as they are. Answers are inserted
/// verbatim and never scanned for further markers.
pub fn substitute(text: &str, answers: &HashMap<String, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |cap: &Captures<'_>| match answers.get(&cap[1]) {
            Some(answer) => answer.clone(),
            None => {
                tracing::warn!("No answer collected for placeholder '{}'", &cap[1]);
                marker(&cap[1])
            }
        })
        .into_owned()
}
