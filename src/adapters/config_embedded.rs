//! Default catalog and parameter definitions compiled into the binary.

use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::ConfigStore;

static CONFIG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/config");

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedConfigStore;

impl EmbeddedConfigStore {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigStore for EmbeddedConfigStore {
    fn source(&self) -> String {
        "built-in defaults".to_string()
    }

    fn read_file(&self, name: &str) -> Result<String, AppError> {
        CONFIG_DIR
            .get_file(name)
            .and_then(|file| file.contents_utf8())
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::ConfigMissing(format!("<embedded>/{}", name)))
    }
}
