use std::path::{Path, PathBuf};

use super::load_settings::{LoadedSettings, load_settings};
use crate::adapters::{EmbeddedConfigStore, FilesystemConfigStore};
use crate::domain::AppError;
use crate::ports::ConfigStore;

/// Global options that decide where config and settings come from.
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub config_dir: Option<PathBuf>,
    pub settings: Option<PathBuf>,
}

/// The config store selected for a run.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    Filesystem(FilesystemConfigStore),
    Embedded(EmbeddedConfigStore),
}

impl ConfigStore for ConfigSource {
    fn source(&self) -> String {
        match self {
            ConfigSource::Filesystem(store) => store.source(),
            ConfigSource::Embedded(store) => store.source(),
        }
    }

    fn read_file(&self, name: &str) -> Result<String, AppError> {
        match self {
            ConfigSource::Filesystem(store) => store.read_file(name),
            ConfigSource::Embedded(store) => store.read_file(name),
        }
    }
}

/// Load settings and pick the config store for `options`.
pub fn resolve_store(
    options: &ConfigOptions,
    cwd: &Path,
) -> Result<(ConfigSource, LoadedSettings), AppError> {
    let settings = load_settings(options.settings.as_deref(), cwd)?;

    let dir = match &options.config_dir {
        Some(dir) if dir.is_absolute() => Some(dir.clone()),
        Some(dir) => Some(cwd.join(dir)),
        None => settings.config_dir(),
    };

    let source = match dir {
        Some(dir) => ConfigSource::Filesystem(FilesystemConfigStore::new(dir)?),
        None => {
            tracing::debug!("using embedded config");
            ConfigSource::Embedded(EmbeddedConfigStore::new())
        }
    };
    Ok((source, settings))
}
