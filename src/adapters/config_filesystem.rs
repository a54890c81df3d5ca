use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigStore;

/// Config directory on disk holding `prompts.yaml` and `parameters.yaml`.
#[derive(Debug, Clone)]
pub struct FilesystemConfigStore {
    root: PathBuf,
}

impl FilesystemConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AppError::ConfigMissing(root.display().to_string()));
        }
        tracing::debug!(root = %root.display(), "using config directory");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ConfigStore for FilesystemConfigStore {
    fn source(&self) -> String {
        self.root.display().to_string()
    }

    fn read_file(&self, name: &str) -> Result<String, AppError> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(AppError::ConfigMissing(path.display().to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }
}
