//! User settings loaded from `mjp.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, Language};

/// File name looked up in the working directory when no `--settings` path is given.
pub const SETTINGS_FILE: &str = "mjp.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Language for catalog labels in listings.
    #[serde(default)]
    pub language: Language,
    /// Directory holding `prompts.yaml` and `parameters.yaml`.
    #[serde(default)]
    pub config_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// `config_dir` resolved against the directory the settings file lives in.
    pub fn resolved_config_dir(&self, settings_dir: &Path) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| {
            if dir.is_absolute() { dir.clone() } else { settings_dir.join(dir) }
        })
    }
}
