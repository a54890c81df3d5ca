//! Typed model of `prompts.yaml`.

use serde::{Deserialize, Serialize};

use super::key::FragmentKey;
use crate::domain::{AppError, Language, PositionTag};

const PREVIEW_DIR: &str = "preview-images";
const PLACEHOLDER_PREVIEW: &str = "placeholder.svg";

/// A single selectable prompt fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptFragment {
    pub id: String,
    /// Localized display label.
    #[serde(rename = "prompt_zh", default)]
    pub label: String,
    /// Text emitted into the prompt.
    #[serde(rename = "prompt_en")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Preview image path relative to `preview-images/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl PromptFragment {
    /// Label shown to the user in the given language.
    pub fn label(&self, language: Language) -> &str {
        match language {
            Language::Chinese if !self.label.trim().is_empty() => &self.label,
            _ => &self.text,
        }
    }

    /// Public URL of the preview image under `base`, or the placeholder image.
    pub fn preview_path(&self, base: &str) -> String {
        match self.preview.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(preview) => format!("{}{}/{}", base, PREVIEW_DIR, preview),
            None => format!("{}{}/{}", base, PREVIEW_DIR, PLACEHOLDER_PREVIEW),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub prompts: Vec<PromptFragment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpecial {
    #[serde(default)]
    pub is_artist: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_selection_hint: Option<String>,
    /// Raw tag as written; resolved through [`PositionTag::resolve`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<CategorySpecial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts: Option<Vec<PromptFragment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_categories: Option<Vec<SubCategory>>,
}

impl Category {
    /// Placement of this category's fragments in the prompt body.
    pub fn position_tag(&self) -> PositionTag {
        PositionTag::resolve(self.special.as_ref().and_then(|s| s.position_tag.as_deref()))
    }

    pub fn is_artist(&self) -> bool {
        self.special.as_ref().is_some_and(|s| s.is_artist)
    }

    pub fn single_selection_hint(&self) -> Option<&str> {
        self.special.as_ref().and_then(|s| s.single_selection_hint.as_deref())
    }

    /// Flat fragment list (empty when the category is nested).
    pub fn flat_prompts(&self) -> &[PromptFragment] {
        self.prompts.as_deref().unwrap_or_default()
    }

    pub fn sub_categories(&self) -> &[SubCategory] {
        self.sub_categories.as_deref().unwrap_or_default()
    }

    pub fn sub_category(&self, id: &str) -> Option<&SubCategory> {
        self.sub_categories().iter().find(|s| s.id == id)
    }

    /// Every fragment with its key, flat fragments first.
    pub fn fragments(&self) -> Vec<(FragmentKey, &PromptFragment)> {
        let flat = self.flat_prompts().iter().map(|p| (FragmentKey::new(&self.id, &p.id), p));
        let nested = self.sub_categories().iter().flat_map(|sub| {
            sub.prompts.iter().map(|p| (FragmentKey::nested(&self.id, &sub.id, &p.id), p))
        });
        flat.chain(nested).collect()
    }

    pub fn fragment_count(&self) -> usize {
        let nested: usize = self.sub_categories().iter().map(|s| s.prompts.len()).sum();
        self.flat_prompts().len() + nested
    }
}

/// Ready-made subject/environment description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEnvironmentExample {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub environment: String,
    pub full_text: String,
}

/// Root of `prompts.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptsConfig {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub subject_environment_examples: Vec<SubjectEnvironmentExample>,
}

impl PromptsConfig {
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|err| AppError::yaml("prompts.yaml", err))
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a fragment. A key with a subcategory searches only that
    /// subcategory; a key without one searches the flat list.
    pub fn fragment(&self, key: &FragmentKey) -> Option<&PromptFragment> {
        let category = self.category(&key.category_id)?;
        match &key.sub_category_id {
            Some(sub_id) => {
                category.sub_category(sub_id)?.prompts.iter().find(|p| p.id == key.fragment_id)
            }
            None => category.flat_prompts().iter().find(|p| p.id == key.fragment_id),
        }
    }

    pub fn example(&self, id: &str) -> Option<&SubjectEnvironmentExample> {
        self.subject_environment_examples.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
categories:
  - id: artist
    name: 艺术家
    special:
      isArtist: true
      singleSelectionHint: 建议单选
      positionTag: artist
    prompts:
      - id: ansel
        prompt_zh: 安塞尔·亚当斯
        prompt_en: Ansel Adams
        preview: artist/ansel.webp
  - id: camera
    name: 镜头
    special:
      positionTag: camera
    subCategories:
      - id: lens
        name: 焦段
        prompts:
          - id: wide
            prompt_zh: 广角
            prompt_en: wide angle lens
  - id: mood
    name: 氛围
    prompts:
      - id: calm
        prompt_en: calm atmosphere
subjectEnvironmentExamples:
  - id: lighthouse
    title: Lighthouse
    subject: a lone lighthouse
    environment: on a stormy cliff
    fullText: a lone lighthouse on a stormy cliff
"#;

    fn sample() -> PromptsConfig {
        PromptsConfig::from_yaml(SAMPLE).unwrap()
    }

    #[test]
    fn parses_flat_and_nested_categories() {
        let config = sample();
        assert_eq!(config.categories.len(), 3);
        assert_eq!(config.category("artist").unwrap().position_tag(), PositionTag::Artist);
        assert!(config.category("artist").unwrap().is_artist());
        assert_eq!(config.category("camera").unwrap().sub_categories().len(), 1);
        assert_eq!(config.category("mood").unwrap().position_tag(), PositionTag::Other);
    }

    #[test]
    fn fragment_lookup_respects_subcategory() {
        let config = sample();
        let wide = config.fragment(&FragmentKey::nested("camera", "lens", "wide")).unwrap();
        assert_eq!(wide.text, "wide angle lens");
        assert!(config.fragment(&FragmentKey::new("camera", "wide")).is_none());
        assert!(config.fragment(&FragmentKey::nested("camera", "prime", "wide")).is_none());
        assert!(config.fragment(&FragmentKey::new("missing", "wide")).is_none());
    }

    #[test]
    fn fragments_lists_every_key() {
        let config = sample();
        let keys: Vec<String> = config
            .category("camera")
            .unwrap()
            .fragments()
            .into_iter()
            .map(|(key, _)| key.to_string())
            .collect();
        assert_eq!(keys, vec!["camera/lens/wide"]);
        assert_eq!(config.category("camera").unwrap().fragment_count(), 1);
    }

    #[test]
    fn label_falls_back_to_text_without_translation() {
        let config = sample();
        let calm = config.fragment(&FragmentKey::new("mood", "calm")).unwrap();
        assert_eq!(calm.label(Language::Chinese), "calm atmosphere");
        let ansel = config.fragment(&FragmentKey::new("artist", "ansel")).unwrap();
        assert_eq!(ansel.label(Language::Chinese), "安塞尔·亚当斯");
        assert_eq!(ansel.label(Language::English), "Ansel Adams");
    }

    #[test]
    fn preview_path_uses_placeholder_when_absent() {
        let config = sample();
        let ansel = config.fragment(&FragmentKey::new("artist", "ansel")).unwrap();
        assert_eq!(ansel.preview_path("/"), "/preview-images/artist/ansel.webp");
        let calm = config.fragment(&FragmentKey::new("mood", "calm")).unwrap();
        assert_eq!(calm.preview_path("/app/"), "/app/preview-images/placeholder.svg");
    }

    #[test]
    fn examples_are_looked_up_by_id() {
        let config = sample();
        assert_eq!(
            config.example("lighthouse").unwrap().full_text,
            "a lone lighthouse on a stormy cliff"
        );
        assert!(config.example("castle").is_none());
    }

    #[test]
    fn malformed_yaml_reports_file() {
        let err = PromptsConfig::from_yaml("categories: [").unwrap_err();
        assert!(err.to_string().contains("prompts.yaml"));
    }
}
