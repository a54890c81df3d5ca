//! Structural checks for `prompts.yaml`.

use std::collections::HashSet;

use super::model::{Category, PromptFragment, PromptsConfig};
use crate::domain::{Diagnostics, PositionTag};

const FILE: &str = "prompts.yaml";

pub fn validate_prompts(config: &PromptsConfig) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();

    if config.categories.is_empty() {
        diagnostics.push_warning(FILE, "catalog defines no categories");
    }

    let mut category_ids = HashSet::new();
    for category in &config.categories {
        if !category_ids.insert(category.id.as_str()) {
            diagnostics.push_error(FILE, format!("duplicate category id '{}'", category.id));
        }
        check_category(category, &mut diagnostics);
    }

    let mut example_ids = HashSet::new();
    for example in &config.subject_environment_examples {
        if !example_ids.insert(example.id.as_str()) {
            diagnostics.push_error(FILE, format!("duplicate example id '{}'", example.id));
        }
        if example.full_text.trim().is_empty() {
            diagnostics.push_warning(FILE, format!("example '{}' has empty fullText", example.id));
        }
    }

    diagnostics
}

fn check_category(category: &Category, diagnostics: &mut Diagnostics) {
    let id = &category.id;

    if let Some(raw) = category.special.as_ref().and_then(|s| s.position_tag.as_deref())
        && PositionTag::parse(raw).is_none()
    {
        diagnostics.push_warning(
            FILE,
            format!("category '{}' has unknown positionTag '{}'; treated as 'other'", id, raw),
        );
    }

    match (&category.prompts, &category.sub_categories) {
        (Some(_), Some(_)) => diagnostics.push_error(
            FILE,
            format!("category '{}' defines both prompts and subCategories", id),
        ),
        (None, None) => {
            diagnostics.push_error(FILE, format!("category '{}' defines no prompts", id))
        }
        _ => {}
    }

    check_fragments(&format!("category '{}'", id), category.flat_prompts(), diagnostics);

    let mut sub_ids = HashSet::new();
    for sub in category.sub_categories() {
        if !sub_ids.insert(sub.id.as_str()) {
            diagnostics.push_error(
                FILE,
                format!("duplicate subcategory id '{}' in category '{}'", sub.id, id),
            );
        }
        if sub.prompts.is_empty() {
            diagnostics
                .push_warning(FILE, format!("subcategory '{}/{}' has no prompts", id, sub.id));
        }
        check_fragments(&format!("subcategory '{}/{}'", id, sub.id), &sub.prompts, diagnostics);
    }
}

fn check_fragments(owner: &str, fragments: &[PromptFragment], diagnostics: &mut Diagnostics) {
    let mut ids = HashSet::new();
    for fragment in fragments {
        if !ids.insert(fragment.id.as_str()) {
            diagnostics
                .push_error(FILE, format!("duplicate prompt id '{}' in {}", fragment.id, owner));
        }
        if fragment.text.trim().is_empty() {
            diagnostics.push_error(
                FILE,
                format!("prompt '{}' in {} has empty prompt_en", fragment.id, owner),
            );
        }
    }
}
