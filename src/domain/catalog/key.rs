use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Identity of one catalog fragment: `(categoryId, subCategoryId?, fragmentId)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentKey {
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category_id: Option<String>,
    pub fragment_id: String,
}

impl FragmentKey {
    pub fn new(category_id: impl Into<String>, fragment_id: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            sub_category_id: None,
            fragment_id: fragment_id.into(),
        }
    }

    pub fn nested(
        category_id: impl Into<String>,
        sub_category_id: impl Into<String>,
        fragment_id: impl Into<String>,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            sub_category_id: Some(sub_category_id.into()),
            fragment_id: fragment_id.into(),
        }
    }

    /// Parse a selector written as `category/fragment` or `category/sub/fragment`.
    pub fn parse(selector: &str) -> Result<Self, AppError> {
        let parts: Vec<&str> = selector.trim().split('/').collect();
        if parts.iter().any(|part| part.trim().is_empty()) {
            return Err(AppError::InvalidSelector(selector.to_string()));
        }
        match parts.as_slice() {
            [category, fragment] => Ok(FragmentKey::new(category.trim(), fragment.trim())),
            [category, sub, fragment] => {
                Ok(FragmentKey::nested(category.trim(), sub.trim(), fragment.trim()))
            }
            _ => Err(AppError::InvalidSelector(selector.to_string())),
        }
    }
}

impl fmt::Display for FragmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_category_id {
            Some(sub) => write!(f, "{}/{}/{}", self.category_id, sub, self.fragment_id),
            None => write!(f, "{}/{}", self.category_id, self.fragment_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_and_nested_selectors() {
        assert_eq!(
            FragmentKey::parse("lighting/golden-hour").unwrap(),
            FragmentKey::new("lighting", "golden-hour")
        );
        assert_eq!(
            FragmentKey::parse("camera/lens/wide").unwrap(),
            FragmentKey::nested("camera", "lens", "wide")
        );
    }

    #[test]
    fn rejects_malformed_selectors() {
        for bad in ["lighting", "a/b/c/d", "a//b", "/x", ""] {
            assert!(
                matches!(FragmentKey::parse(bad), Err(AppError::InvalidSelector(_))),
                "selector '{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn display_matches_selector_syntax() {
        assert_eq!(FragmentKey::nested("camera", "lens", "wide").to_string(), "camera/lens/wide");
        assert_eq!(FragmentKey::new("artist", "ansel").to_string(), "artist/ansel");
    }
}
