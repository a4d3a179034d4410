//! Static question table keyed by template id and placeholder name
//!
//! Each known template id maps a subset of its placeholders to a tailored
//! question. Any placeholder without an entry gets the generic question from
//! [`generic_question`]. Ids listed with no questions are known templates
//! that always use the generic question.

use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

/// Placeholder name to question pairs for one template
pub type QuestionEntries = &'static [(&'static str, &'static str)];

static BUILTIN: Lazy<QuestionTable> = Lazy::new(|| QuestionTable::from_entries(BUILTIN_QUESTIONS));

/// The fallback question for a placeholder without a tailored entry
pub fn generic_question(placeholder: &str) -> String {
    format!("Enter a value for '{}': ", placeholder)
}

/// Lookup from `(template id, placeholder)` to question text
#[derive(Debug)]
pub struct QuestionTable {
    templates: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl QuestionTable {
    /// The process-wide table of tailored questions, built on first use
    pub fn builtin() -> &'static QuestionTable {
        &BUILTIN
    }

    /// Build a table from static `(template id, entries)` data
    ///
    /// A template id listed twice has its entries merged, later entries
    /// winning.
    pub fn from_entries(data: &'static [(&'static str, QuestionEntries)]) -> Self {
        let mut templates: HashMap<&'static str, HashMap<&'static str, &'static str>> =
            HashMap::with_capacity(data.len());
        for (template_id, entries) in data {
            let questions = templates.entry(*template_id).or_default();
            questions.extend(entries.iter().copied());
        }
        Self { templates }
    }

    /// The tailored question for a placeholder, if one exists
    pub fn tailored(&self, template_id: &str, placeholder: &str) -> Option<&'static str> {
        self.templates
            .get(template_id)
            .and_then(|questions| questions.get(placeholder))
            .copied()
    }

    /// The question to ask for `placeholder` in template `template_id`
    ///
    /// Falls back to [`generic_question`] when no tailored entry exists, so
    /// this always produces a question.
    pub fn question_for(&self, template_id: &str, placeholder: &str) -> Cow<'static, str> {
        match self.tailored(template_id, placeholder) {
            Some(question) => Cow::Borrowed(question),
            None => {
                tracing::trace!(
                    "No tailored question for '{}' in '{}', using generic question",
                    placeholder,
                    template_id
                );
                Cow::Owned(generic_question(placeholder))
            }
        }
    }

    /// Whether `template_id` is a known template
    pub fn contains(&self, template_id: &str) -> bool {
        self.templates.contains_key(template_id)
    }

    /// All known template ids, sorted
    pub fn template_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.templates.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of known template ids
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the table has no templates
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

const BUILTIN_QUESTIONS: &[(&str, QuestionEntries)] = &[
    // Content Creation
    (
        "blog_post",
        &[
            ("topic", "What is the main topic of the blog post? "),
            (
                "tone",
                "What tone should the blog post have? (e.g., informative, conversational, humorous): ",
            ),
            (
                "audience",
                "Who is the target audience for this post? (e.g., beginners, industry experts): ",
            ),
            ("length", "What is the approximate desired word count? "),
        ],
    ),
    ("blog_post_titles", &[("topic", "What is the topic of the blog post you need titles for? ")]),
    (
        "youtube_script",
        &[
            ("topic", "What is the subject of the YouTube video? "),
            ("duration", "What is the target video length (in minutes)? "),
            ("style", "What style should the video be? (e.g., documentary, tutorial, comedic): "),
        ],
    ),
    (
        "social_media_post",
        &[
            ("product_or_service", "What product or service are you promoting? "),
            (
                "platform",
                "Which social media platform is this for? (e.g., Twitter, Instagram, Facebook): ",
            ),
        ],
    ),
    (
        "short_story",
        &[
            ("genre", "What genre should the story be? (e.g., sci-fi, fantasy, mystery): "),
            ("character_description", "Describe the main character: "),
            ("challenge", "What challenge must the character overcome? "),
        ],
    ),
    (
        "poem",
        &[
            ("subject", "What is the subject of the poem? "),
            (
                "poet",
                "Which poet's style should it emulate? (e.g., Edgar Allan Poe, Maya Angelou): ",
            ),
        ],
    ),
    (
        "song_lyrics",
        &[
            ("theme", "What is the central theme of the song? "),
            ("mood", "What mood should the song have? (e.g., upbeat, melancholic, reflective): "),
            ("genre", "What genre of music is this for? (e.g., pop, rock, country): "),
        ],
    ),
    (
        "marketing_email",
        &[
            ("event_or_product", "What event or product are you announcing? "),
            ("audience", "Who is the target audience for this email? "),
        ],
    ),
    (
        "press_release",
        &[
            ("company", "What is the name of the company issuing the press release? "),
            ("announcement", "What is the announcement about? "),
        ],
    ),
    ("interview_questions", &[("role", "What job role are these interview questions for? ")]),
    ("product_description", &[("product_name", "What is the name of the product? ")]),
    ("tweet_series", &[("topic", "What topic do you want to tweet about? ")]),
    ("newsletter_article", &[("industry", "Which industry are the trends about? ")]),
    (
        "creative_brief",
        &[("product_or_brand", "What product or brand is this creative brief for? ")],
    ),
    (
        "case_study",
        &[
            ("company", "What is the name of the company in the case study? "),
            ("product_or_service", "What product or service did they use? "),
            ("result", "What was the successful outcome? "),
        ],
    ),
    ("faq_list", &[("product_or_service", "What product or service are the FAQs for? ")]),
    (
        "podcast_script",
        &[
            ("topic", "What is the topic of the podcast episode? "),
            ("duration", "What is the target duration of the episode (in minutes)? "),
            ("guest_or_expert", "Will there be a guest or expert? If so, who? "),
        ],
    ),
    (
        "content_calendar",
        &[
            ("month", "Which month is this content calendar for? "),
            ("niche", "What is the niche of the blog? "),
        ],
    ),
    (
        "white_paper",
        &[
            ("topic", "What is the topic of the white paper? "),
            ("audience", "Who is the target audience? "),
        ],
    ),
    ("character_profile", &[("name", "What is the character's name? ")]),
    // Technical
    (
        "technical_explanation",
        &[
            ("concept", "What technical concept do you want to explain? "),
            ("level", "Who is the target audience? (e.g., beginner, intermediate, expert): "),
        ],
    ),
    (
        "code_snippet",
        &[
            ("language", "Which programming language do you want the code in? "),
            ("task_description", "What should the code accomplish? "),
        ],
    ),
    (
        "debug_code",
        &[
            ("language", "What language is the code in? "),
            ("code_block", "Paste the code you want to debug: "),
        ],
    ),
    (
        "tutorial",
        &[
            ("technology_or_tool", "What technology or tool is the tutorial for? "),
            ("audience", "Who is the target audience for this tutorial? "),
        ],
    ),
    ("use_cases", &[("technology", "What technology do you want to find use cases for? ")]),
    (
        "compare_technologies",
        &[
            ("technology_1", "What is the first technology to compare? "),
            ("technology_2", "What is the second technology to compare? "),
        ],
    ),
    ("technical_specification", &[("feature_description", "What does the new feature do? ")]),
    ("api_documentation", &[("api_endpoints", "What are the API endpoints to document? ")]),
    (
        "unit_test",
        &[
            ("testing_framework", "What testing framework are you using? "),
            ("code_to_test", "Paste the code you want to write a unit test for: "),
        ],
    ),
    ("refactor_code", &[("code_to_refactor", "Paste the code you want to refactor: ")]),
    ("explain_error", &[("error_message", "Paste the error message you want explained: ")]),
    (
        "regex_generator",
        &[(
            "pattern_description",
            "Describe the pattern you want to match with a regular expression: ",
        )],
    ),
    (
        "sql_query",
        &[
            ("data_description", "What data do you want to retrieve? "),
            ("database_schema", "Provide the database schema: "),
        ],
    ),
    (
        "system_design",
        &[(
            "system_description",
            "What system do you want to design? (e.g., a social media feed, a ride-sharing service): ",
        )],
    ),
    (
        "security_vulnerabilities",
        &[(
            "system_or_application",
            "What system or application do you want to check for vulnerabilities? ",
        )],
    ),
    (
        "cli_script",
        &[("task_to_automate", "What task do you want to automate with a command-line script? ")],
    ),
    (
        "explain_difference",
        &[
            ("term_1", "What is the first term? "),
            ("term_2", "What is the second term? "),
            ("domain", "What is the context or domain of these terms? "),
        ],
    ),
    ("data_model", &[("application_description", "What application is the data model for? ")]),
    (
        "pseudocode",
        &[("problem_description", "What problem do you want to solve with pseudocode? ")],
    ),
    (
        "test_cases",
        &[("function_to_test", "Paste the function you want to generate test cases for: ")],
    ),
    // Business and Productivity
    (
        "professional_email",
        &[
            ("recipient", "Who is the recipient of the email? "),
            ("subject", "What is the subject of the email? "),
        ],
    ),
    (
        "meeting_agenda",
        &[
            ("topic", "What is the topic of the meeting? "),
            ("duration", "How long will the meeting be (in minutes)? "),
            ("attendees", "Who will be attending the meeting? "),
        ],
    ),
    (
        "project_plan",
        &[
            ("project_goal", "What is the goal of the project? "),
            ("deadline", "What is the project deadline? "),
            ("budget", "What is the project budget? "),
        ],
    ),
    ("job_description", &[("role", "What is the job role? ")]),
    (
        "swot_analysis",
        &[("company_or_product", "What company or product is this SWOT analysis for? ")],
    ),
    ("business_plan", &[("company_description", "Describe the new company: ")]),
    (
        "cover_letter",
        &[
            ("role", "What role are you applying for? "),
            ("company", "What company are you applying to? "),
        ],
    ),
    ("business_ideas", &[("industry", "What industry are you interested in? ")]),
    (
        "presentation",
        &[
            ("topic", "What is the topic of the presentation? "),
            ("duration", "How long is the presentation (in minutes)? "),
            ("audience", "Who is the target audience? "),
        ],
    ),
    (
        "performance_review",
        &[
            ("employee_name", "What is the employee's name? "),
            ("role", "What is the employee's role? "),
        ],
    ),
    ("negotiation_strategies", &[("negotiation_goal", "What is your negotiation goal? ")]),
    (
        "financial_projection",
        &[("number_of_years", "For how many years do you want to project the financials? ")],
    ),
    (
        "thank_you_note",
        &[
            ("recipient", "Who are you thanking? "),
            ("reason", "What are you thanking them for? "),
        ],
    ),
    (
        "time_management_tips",
        &[("time_management_challenge", "What time management challenge are you facing? ")],
    ),
    ("customer_survey", &[("product_or_service", "What product or service is the survey about? ")]),
    (
        "sales_pitch",
        &[
            ("product_or_service", "What product or service are you selling? "),
            ("customer_description", "Describe the potential customer: "),
        ],
    ),
    ("marketing_slogans", &[("product_or_brand", "What product or brand are the slogans for? ")]),
    (
        "competitive_analysis",
        &[
            ("competitor_1", "Who is the first competitor? "),
            ("competitor_2", "Who is the second competitor? "),
        ],
    ),
    (
        "business_proposal",
        &[
            ("recipient", "Who is the recipient of the proposal? "),
            ("project_description", "What does the project entail? "),
        ],
    ),
    ("kpi_list", &[("department_or_project", "What department or project are the KPIs for? ")]),
    (
        "stock_market_analysis_report",
        &[
            ("company_name", "Enter the full company name: "),
            ("stock_symbol", "Enter the company's stock symbol (e.g., AAPL, GOOG): "),
            (
                "time_horizon",
                "What is the investment time horizon? (e.g., short-term, long-term, 5-year): ",
            ),
            (
                "key_metrics",
                "List the key financial metrics to focus on (e.g., P/E ratio, revenue growth): ",
            ),
            ("competitors", "Who are the main competitors to analyze? (comma-separated): "),
            ("tone", "What tone should the report have? (e.g., formal, objective, cautious): "),
            (
                "audience",
                "Who is the intended audience? (e.g., retail investors, institutional analysts): ",
            ),
        ],
    ),
    // Learning and Education
    ("simple_explanation", &[("concept", "What concept do you want explained in simple terms? ")]),
    ("summarize_text", &[("text_to_summarize", "Paste the text you want to summarize: ")]),
    (
        "lesson_plan",
        &[
            ("subject", "What subject is the lesson plan for? "),
            ("grade_level", "What grade level is this for? "),
            ("duration", "How long should the lesson be (in minutes)? "),
        ],
    ),
    (
        "flashcards",
        &[
            ("subject", "What subject are the flashcards for? "),
            ("topics", "What topics should the flashcards cover? "),
        ],
    ),
    (
        "translate_phrase",
        &[
            ("source_language", "What is the source language? "),
            ("target_language", "What is the target language? "),
            ("phrase_to_translate", "What phrase do you want to translate? "),
        ],
    ),
    ("study_guide", &[("subject", "What subject is the study guide for? ")]),
    (
        "research_paper_topics",
        &[("subject", "What subject do you need research paper topics for? ")],
    ),
    ("biography", &[("historical_figure", "Which historical figure do you want a biography of? ")]),
    (
        "historical_event_significance",
        &[("historical_event", "What historical event do you want to know the significance of? ")],
    ),
    (
        "book_recommendations",
        &[("topic", "What topic are you interested in for book recommendations? ")],
    ),
    ("timeline", &[("person", "Who do you want a timeline of? ")]),
    ("multiple_choice_questions", &[("subject", "What subject are the questions for? ")]),
    (
        "essay",
        &[
            ("essay_topic", "What is the topic of the essay? "),
            ("length", "What is the desired word count? "),
        ],
    ),
    ("vocabulary_list", &[("subject", "What subject is the vocabulary list for? ")]),
    ("debate_prompt", &[("debate_topic", "What is the topic of the debate? ")]),
    ("fun_facts", &[("topic", "What topic do you want fun facts about? ")]),
    ("crossword_puzzle", &[("subject", "What is the subject of the crossword puzzle? ")]),
    ("word_search", &[("subject", "What is the subject of the word search? ")]),
    (
        "historical_dialogue",
        &[
            ("figure_1", "Who is the first historical figure? "),
            ("figure_2", "Who is the second historical figure? "),
            ("topic", "What are they discussing? "),
        ],
    ),
    ("online_resources", &[("topic", "What topic do you want online resources for? ")]),
    // Personal and Lifestyle
    (
        "workout_plan",
        &[
            ("fitness_goal", "What is your fitness goal? "),
            ("duration", "For how many weeks do you want the plan to be? "),
            ("days_per_week", "How many days per week do you want to work out? "),
        ],
    ),
    (
        "meal_plan",
        &[
            ("diet_type", "What type of diet is this for? (e.g., vegan, keto, low-carb): "),
            ("number_of_days", "For how many days do you want the meal plan? "),
        ],
    ),
    (
        "travel_recommendations",
        &[
            ("destination", "Where are you traveling to? "),
            ("duration", "How many days will your trip be? "),
            ("interests", "What are your interests? (e.g., hiking, museums, food): "),
        ],
    ),
    ("birthday_message", &[("person_name", "What is the person's name? ")]),
    (
        "gift_ideas",
        &[
            ("recipient", "Who is the gift for? "),
            ("interests", "What are their interests? "),
        ],
    ),
    (
        "budget_plan",
        &[
            ("amount", "How much do you want to save per month? "),
            ("income", "What is your monthly income? "),
            ("expenses", "What are your fixed monthly expenses? "),
        ],
    ),
    ("conversation_starters", &[]),
    (
        "letter_to_future_self",
        &[("number_of_years", "In how many years will you open this letter? ")],
    ),
    ("date_night_ideas", &[("interests", "What are your shared interests as a couple? ")]),
    ("playlist", &[("mood", "What mood is the playlist for? ")]),
    (
        "affirmations",
        &[("self_improvement_goal", "What self-improvement goal are you working on? ")],
    ),
    ("speech", &[("event", "What event is the speech for? (e.g., wedding, graduation): ")]),
    ("hobby_ideas", &[]),
    ("cleaning_schedule", &[("number_of_bedrooms", "How many bedrooms are in the house? ")]),
    ("random_acts_of_kindness", &[]),
    ("journal_prompt", &[]),
    ("yearly_goals", &[]),
    ("morning_routine", &[("feeling", "How do you want to feel in the morning? ")]),
    ("icebreaker_questions", &[]),
    ("personal_story", &[]),
];

#[cfg(test)]
mod tests {
    use super::*;

    const UNLISTED: &str = "__not_a_known_placeholder__";

    #[test]
    fn test_builtin_covers_known_templates() {
        let table = QuestionTable::builtin();
        assert_eq!(table.len(), BUILTIN_QUESTIONS.len());
        assert!(table.len() >= 20);
        assert!(table.contains("blog_post"));
        assert!(table.contains("stock_market_analysis_report"));
        assert!(!table.contains("blog_post.txt"));
    }

    #[test]
    fn test_every_tailored_entry_is_returned() {
        let table = QuestionTable::builtin();
        let mut checked_templates = 0;

        for (template_id, entries) in BUILTIN_QUESTIONS {
            for (placeholder, question) in *entries {
                assert_eq!(
                    table.question_for(template_id, placeholder),
                    *question,
                    "wrong question for {}/{}",
                    template_id,
                    placeholder
                );
            }
            assert_eq!(
                table.question_for(template_id, UNLISTED),
                generic_question(UNLISTED),
                "expected fallback for {}",
                template_id
            );
            checked_templates += 1;
        }

        assert!(checked_templates >= 20);
    }

    #[test]
    fn test_placeholder_from_another_template_uses_fallback() {
        let table = QuestionTable::builtin();
        // `code_block` is tailored for debug_code only
        assert!(table.tailored("debug_code", "code_block").is_some());
        assert_eq!(
            table.question_for("poem", "code_block"),
            "Enter a value for 'code_block': "
        );
    }

    #[test]
    fn test_blog_post_questions() {
        let table = QuestionTable::builtin();
        assert_eq!(
            table.question_for("blog_post", "topic"),
            "What is the main topic of the blog post? "
        );
        assert_eq!(
            table.question_for("blog_post", "tone"),
            "What tone should the blog post have? (e.g., informative, conversational, humorous): "
        );
        assert!(table.tailored("blog_post", "audience").is_some());
        assert!(table.tailored("blog_post", "length").is_some());
    }

    #[test]
    fn test_stock_analysis_questions_in_unified_table() {
        let table = QuestionTable::builtin();
        for placeholder in [
            "company_name",
            "stock_symbol",
            "time_horizon",
            "key_metrics",
            "competitors",
            "tone",
            "audience",
        ] {
            assert!(
                table
                    .tailored("stock_market_analysis_report", placeholder)
                    .is_some(),
                "missing {}",
                placeholder
            );
        }
    }

    #[test]
    fn test_known_template_without_questions() {
        let table = QuestionTable::builtin();
        assert!(table.contains("journal_prompt"));
        assert_eq!(
            table.question_for("journal_prompt", "theme"),
            "Enter a value for 'theme': "
        );
    }

    #[test]
    fn test_unknown_template_uses_fallback() {
        let table = QuestionTable::builtin();
        assert_eq!(
            table.question_for("my_custom_template", "topic"),
            "Enter a value for 'topic': "
        );
    }

    #[test]
    fn test_template_ids_sorted() {
        let ids = QuestionTable::builtin().template_ids();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_from_entries_merges_duplicates() {
        static DATA: &[(&str, QuestionEntries)] = &[
            ("letter", &[("recipient", "Who is it for? ")]),
            ("letter", &[("recipient", "Who receives it? "), ("tone", "Tone? ")]),
        ];
        let table = QuestionTable::from_entries(DATA);

        assert_eq!(table.len(), 1);
        assert_eq!(table.tailored("letter", "recipient"), Some("Who receives it? "));
        assert_eq!(table.tailored("letter", "tone"), Some("Tone? "));
    }
}
