//! Keyword-based category suggestion
//!
//! The free-form answer to "what would you like to do" is matched against an
//! ordered list of keyword sets. The first set with a keyword contained in
//! the lower-cased answer wins.

/// A category name and the keywords that suggest it
pub type KeywordSet = (&'static str, &'static [&'static str]);

/// Keyword sets in match order. `explain` appears under both `technical`
/// and `learning_and_education`; only the first can ever match.
pub const CATEGORY_KEYWORDS: &[KeywordSet] = &[
    ("content_creation", &["blog", "write", "social media", "content"]),
    ("technical", &["code", "technical", "debug", "explain"]),
    (
        "business_and_productivity",
        &["business", "email", "meeting", "project", "stock"],
    ),
    (
        "learning_and_education",
        &["learn", "study", "explain", "education"],
    ),
    (
        "personal_and_lifestyle",
        &["personal", "lifestyle", "workout", "meal"],
    ),
];

/// Suggest a category name for a free-form statement of intent
///
/// Matching is by substring, so `"codes"` matches `code`. The result is a
/// category name only; callers check it against the categories that exist.
pub fn suggest_category(intent: &str) -> Option<&'static str> {
    suggest_from(CATEGORY_KEYWORDS, intent)
}

/// Suggest a category using a caller-supplied keyword list
pub fn suggest_from(keyword_sets: &[KeywordSet], intent: &str) -> Option<&'static str> {
    let intent = intent.to_lowercase();
    let suggestion = keyword_sets
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| intent.contains(k)))
        .map(|(category, _)| *category);

    tracing::debug!("Category suggestion for {:?}: {:?}", intent, suggestion);
    suggestion
}
