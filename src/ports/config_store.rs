use crate::domain::{AppError, ParametersConfig, PromptsConfig};

pub const PROMPTS_FILE: &str = "prompts.yaml";
pub const PARAMETERS_FILE: &str = "parameters.yaml";

/// Source of the catalog and parameter definitions.
pub trait ConfigStore {
    /// Where the config comes from, for status output.
    fn source(&self) -> String;

    /// Raw contents of a config file by name.
    fn read_file(&self, name: &str) -> Result<String, AppError>;

    fn load_prompts(&self) -> Result<PromptsConfig, AppError> {
        PromptsConfig::from_yaml(&self.read_file(PROMPTS_FILE)?)
    }

    fn load_parameters(&self) -> Result<ParametersConfig, AppError> {
        ParametersConfig::from_yaml(&self.read_file(PARAMETERS_FILE)?)
    }
}
