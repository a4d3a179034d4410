//! Checks for the template library shipped in the repository

use prompt_builder::{extract_placeholders, suggest::CATEGORY_KEYWORDS, QuestionTable, TemplateStore};
use std::path::PathBuf;

fn shipped_store() -> TemplateStore {
    TemplateStore::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../templates"))
}

#[test]
fn test_shipped_categories_match_suggestions() {
    let store = shipped_store();
    let names: Vec<String> = store
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    for (category, _) in CATEGORY_KEYWORDS {
        assert!(
            names.iter().any(|n| n == category),
            "suggested category '{}' has no directory",
            category
        );
    }
}

#[test]
fn test_every_shipped_template_is_in_question_table() {
    let store = shipped_store();
    let table = QuestionTable::builtin();
    let mut count = 0;

    for category in store.list_categories().unwrap() {
        let templates = store.list_templates(&category.name).unwrap();
        assert!(!templates.is_empty(), "category '{}' is empty", category.name);

        for template in templates {
            assert!(
                table.contains(&template.id),
                "template '{}' has no question table entry",
                template.id
            );

            let text = store.read_template(&template).unwrap();
            for placeholder in extract_placeholders(&text) {
                assert!(
                    table.tailored(&template.id, &placeholder).is_some(),
                    "no tailored question for '{}' in '{}'",
                    placeholder,
                    template.id
                );
            }
            count += 1;
        }
    }

    assert!(count >= 10);
}
