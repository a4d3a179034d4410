//! The interactive prompt-building session
//!
//! A session walks one user from "what would you like to do" to a finished
//! prompt: pick a category (possibly suggested), pick a template, answer one
//! question per placeholder, print the result. Empty stores and empty
//! categories end the session early without an error.

use crate::console::Console;
use crate::exit_codes::{EXIT_NO_CATEGORIES, EXIT_NO_TEMPLATES, EXIT_SUCCESS};
use anyhow::{bail, Context, Result};
use prompt_builder::{
    extract_placeholders, is_affirmative, parse_selection, substitute, suggest_category,
    Category, QuestionTable, RetryPolicy, Template, TemplateStore,
};
use std::collections::HashMap;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The final prompt was produced and printed
    Composed(String),
    /// The store has no categories
    NoCategories,
    /// The chosen category has no templates
    NoTemplates {
        /// The category that was chosen
        category: String,
    },
}

impl SessionOutcome {
    /// The process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Composed(_) => EXIT_SUCCESS,
            Self::NoCategories => EXIT_NO_CATEGORIES,
            Self::NoTemplates { .. } => EXIT_NO_TEMPLATES,
        }
    }
}

/// One interactive run from intent to final prompt
pub struct Session<'a, C> {
    store: &'a TemplateStore,
    questions: &'a QuestionTable,
    console: C,
    retry: RetryPolicy,
    raw: bool,
}

impl<'a, C: Console> Session<'a, C> {
    /// Create a session with unbounded retries and the banner enabled
    pub fn new(store: &'a TemplateStore, questions: &'a QuestionTable, console: C) -> Self {
        Self {
            store,
            questions,
            console,
            retry: RetryPolicy::default(),
            raw: false,
        }
    }

    /// Limit how often menus re-prompt after invalid input
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Print only the final prompt text, without the banner
    pub fn with_raw_output(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Consume the session and return its console
    pub fn into_console(self) -> C {
        self.console
    }

    /// Run the session to completion
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let categories = self
            .store
            .list_categories()
            .context("Failed to list template categories")?;

        if categories.is_empty() {
            tracing::info!("No categories under {}", self.store.root().display());
            self.console.say(&format!(
                "No categories found in '{}'.",
                self.store.root().display()
            ))?;
            return Ok(SessionOutcome::NoCategories);
        }

        let category = self.choose_category(&categories)?;
        tracing::debug!("Using category '{}'", category.name);

        let templates = self
            .store
            .list_templates(&category.name)
            .with_context(|| format!("Failed to list templates in '{}'", category.name))?;

        if templates.is_empty() {
            self.console.say(&format!(
                "No prompt templates found in the '{}' category.",
                category.name
            ))?;
            return Ok(SessionOutcome::NoTemplates {
                category: category.name.clone(),
            });
        }

        let template = self.select(
            "Available prompt templates:",
            "Choose a template (by number): ",
            &templates,
            |t| t.file_name.as_str(),
        )?;

        let text = self
            .store
            .read_template(template)
            .with_context(|| format!("Failed to load template '{}'", template.file_name))?;

        let answers = self.collect_answers(template, &text)?;
        let final_prompt = substitute(&text, &answers);

        if self.raw {
            self.console.say(&final_prompt)?;
        } else {
            self.console.say("")?;
            self.console.heading("--- Your final prompt ---")?;
            self.console.say(&final_prompt)?;
        }

        Ok(SessionOutcome::Composed(final_prompt))
    }

    fn choose_category<'c>(&mut self, categories: &'c [Category]) -> Result<&'c Category> {
        let intent = self.console.ask("What would you like to do today? ")?;

        if let Some(suggested) = suggest_category(&intent) {
            match categories.iter().find(|c| c.name == suggested) {
                Some(category) => {
                    self.console.say("")?;
                    self.console.say(&format!(
                        "Based on your input, I suggest the '{}' category.",
                        category.name
                    ))?;
                    let answer = self
                        .console
                        .ask("Would you like to use this category? (y/n): ")?;
                    if is_affirmative(&answer) {
                        return Ok(category);
                    }
                    tracing::debug!("Suggestion '{}' declined", suggested);
                }
                None => {
                    tracing::debug!("Suggested category '{}' is not in the store", suggested);
                }
            }
        }

        self.select(
            "Available categories:",
            "Choose a category (by number): ",
            categories,
            |c| c.name.as_str(),
        )
    }

    /// Show a numbered menu and ask until a valid entry is chosen
    pub fn select<'i, T>(
        &mut self,
        heading: &str,
        question: &str,
        items: &'i [T],
        label: impl Fn(&T) -> &str,
    ) -> Result<&'i T> {
        self.console.heading(heading)?;
        for (i, item) in items.iter().enumerate() {
            self.console.say(&format!("{}. {}", i + 1, label(item)))?;
        }

        let mut attempts = 0;
        loop {
            let input = self.console.ask(question)?;
            match parse_selection(&input, items.len()) {
                Ok(index) => return Ok(&items[index]),
                Err(invalid) => {
                    attempts += 1;
                    tracing::debug!("Invalid selection ({} so far): {:?}", attempts, invalid);
                    self.console.warn(&invalid.to_string())?;
                    if !self.retry.allows_another(attempts) {
                        bail!("No valid selection after {} attempts", attempts);
                    }
                }
            }
        }
    }

    fn collect_answers(
        &mut self,
        template: &Template,
        text: &str,
    ) -> Result<HashMap<String, String>> {
        let placeholders = extract_placeholders(text);
        let mut answers = HashMap::with_capacity(placeholders.len());

        if placeholders.is_empty() {
            tracing::debug!("Template '{}' has no placeholders", template.id);
            return Ok(answers);
        }

        self.console.say("")?;
        self.console
            .heading("To generate the best prompt, please answer the following questions:")?;

        for name in placeholders {
            let question = self.questions.question_for(&template.id, &name);
            let answer = self.console.ask(&question)?;
            answers.insert(name, answer);
        }

        Ok(answers)
    }
}
