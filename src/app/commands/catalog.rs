//! Read-only views of the catalog and parameter definitions.

use serde::Serialize;

use crate::domain::parameters::{ParameterControl, ParameterDefinition};
use crate::domain::{
    AppError, Category, Language, ParameterKey, ParametersConfig, PositionTag, PromptsConfig,
    SubjectEnvironmentExample,
};

/// Base URL preview image paths are rooted at.
pub const PREVIEW_BASE: &str = "/";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub position_tag: PositionTag,
    pub is_artist: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_selection_hint: Option<String>,
    pub fragment_count: usize,
    pub sub_categories: Vec<String>,
}

impl CategorySummary {
    fn from_category(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            position_tag: category.position_tag(),
            is_artist: category.is_artist(),
            single_selection_hint: category.single_selection_hint().map(str::to_string),
            fragment_count: category.fragment_count(),
            sub_categories: category.sub_categories().iter().map(|s| s.id.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FragmentListing {
    /// Selector accepted by `build -s`.
    pub selector: String,
    pub label: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub summary: CategorySummary,
    pub fragments: Vec<FragmentListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterListing {
    pub id: String,
    pub name: String,
    pub flag: String,
    pub control: String,
    pub default: String,
    /// Accepted range or options, empty for free-form values.
    pub accepts: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub fn categories(prompts: &PromptsConfig) -> Vec<CategorySummary> {
    prompts.categories.iter().map(CategorySummary::from_category).collect()
}

pub fn show(
    prompts: &PromptsConfig,
    category_id: &str,
    language: Language,
) -> Result<CategoryDetail, AppError> {
    let category = prompts
        .category(category_id)
        .ok_or_else(|| AppError::CategoryNotFound(category_id.to_string()))?;

    let fragments = category
        .fragments()
        .into_iter()
        .map(|(key, fragment)| FragmentListing {
            selector: key.to_string(),
            label: fragment.label(language).to_string(),
            text: fragment.text.clone(),
            description: fragment.description.clone(),
            preview: fragment.preview_path(PREVIEW_BASE),
        })
        .collect();

    Ok(CategoryDetail { summary: CategorySummary::from_category(category), fragments })
}

/// Definitions in flag order; definitions with unknown ids come last.
pub fn params(parameters: &ParametersConfig) -> Vec<ParameterListing> {
    let mut definitions: Vec<&ParameterDefinition> = parameters.parameters.iter().collect();
    definitions.sort_by_key(|d| d.key().map_or(ParameterKey::ALL.len(), |k| k as usize));

    definitions
        .into_iter()
        .map(|definition| ParameterListing {
            id: definition.id.clone(),
            name: definition.name.clone(),
            flag: definition.key().map(|k| k.flag().to_string()).unwrap_or_default(),
            control: definition.control.type_name().to_string(),
            default: definition.default.raw(),
            accepts: accepts(&definition.control),
            description: definition.description.clone(),
        })
        .collect()
}

fn accepts(control: &ParameterControl) -> String {
    match control {
        ParameterControl::Select { options } => {
            options.iter().map(|o| o.value.as_str()).collect::<Vec<_>>().join(" | ")
        }
        ParameterControl::Slider { min, max, step } => format!("{}..{} step {}", min, max, step),
        ParameterControl::Input { .. } => String::new(),
        ParameterControl::Checkbox { .. } => "true | false".to_string(),
    }
}

pub fn examples(prompts: &PromptsConfig) -> &[SubjectEnvironmentExample] {
    &prompts.subject_environment_examples
}
