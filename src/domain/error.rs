use std::io;

use thiserror::Error;

/// Library-wide error type for mjp operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required config file is missing from the config directory.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// Settings file is present but unusable.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Category id not present in the catalog.
    #[error("Category '{0}' not found")]
    CategoryNotFound(String),

    /// Subject/environment example id not present in the catalog.
    #[error("Example '{0}' not found")]
    ExampleNotFound(String),

    /// Fragment selector could not be parsed.
    #[error(
        "Invalid selector '{0}': expected <category>/<fragment> or <category>/<subcategory>/<fragment>"
    )]
    InvalidSelector(String),

    /// Parameter id is not one of the known keys.
    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Parameter value does not fit the parameter's kind or constraints.
    #[error("Invalid value '{value}' for parameter '{key}': {reason}")]
    InvalidParameterValue { key: String, value: String, reason: String },

    /// Restored selection state breaks the selection's ordering rules.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Reorder index outside the current selection.
    #[error("Cannot move entry {from} to {to}: selection has {len} entries")]
    InvalidReorder { from: usize, to: usize, len: usize },

    /// Prompt is blank and cannot be submitted.
    #[error("Prompt is empty")]
    EmptyPrompt,

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Interactive input failed.
    #[error("Prompt input failed: {0}")]
    PromptInput(String),

    /// YAML parsing error.
    #[error("YAML parse error in {what}: {source}")]
    YamlParseError {
        what: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON output could not be produced.
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl AppError {
    pub fn yaml<S: Into<String>>(what: S, source: serde_yaml::Error) -> Self {
        AppError::YamlParseError { what: what.into(), source }
    }
}
