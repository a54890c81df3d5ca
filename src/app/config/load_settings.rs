use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::settings::SETTINGS_FILE;
use crate::domain::{AppError, Settings};

/// Settings together with the directory its relative paths resolve against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub base_dir: PathBuf,
    /// Path of the file the settings came from, if any.
    pub path: Option<PathBuf>,
}

impl LoadedSettings {
    pub fn config_dir(&self) -> Option<PathBuf> {
        self.settings.resolved_config_dir(&self.base_dir)
    }
}

/// Load settings from `explicit`, or from `mjp.toml` in `cwd` when present.
///
/// An explicit path that does not exist is an error; a missing `mjp.toml`
/// yields default settings.
pub fn load_settings(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedSettings, AppError> {
    let path = match explicit {
        Some(path) => {
            let path = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
            if !path.is_file() {
                return Err(AppError::InvalidSettings(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            path
        }
        None => {
            let path = cwd.join(SETTINGS_FILE);
            if !path.is_file() {
                return Ok(LoadedSettings { base_dir: cwd.to_path_buf(), ..Default::default() });
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    let settings = Settings::from_toml(&content)?;
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf());
    tracing::debug!(path = %path.display(), "loaded settings");

    Ok(LoadedSettings { settings, base_dir, path: Some(path) })
}
