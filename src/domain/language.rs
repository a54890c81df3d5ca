use std::fmt;

use serde::{Deserialize, Serialize};

/// Display language for catalog labels. Prompt output is always English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "zh-CN")]
    Chinese,
    #[default]
    #[serde(rename = "en-US")]
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh-CN",
            Language::English => "en-US",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.to_lowercase().as_str() {
            "zh-cn" | "zh" => Some(Language::Chinese),
            "en-us" | "en" => Some(Language::English),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_short_forms() {
        assert_eq!(Language::from_code("zh"), Some(Language::Chinese));
        assert_eq!(Language::from_code("EN-US"), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
    }
}
