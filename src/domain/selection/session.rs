use serde::{Deserialize, Serialize};

use super::store::Selection;
use crate::domain::AppError;
use crate::domain::parameters::{ParameterValues, ParametersConfig};
use crate::domain::prompt::{assemble, assemble_flat};

/// Selection, subject and parameter values edited together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptSession {
    pub selection: Selection,
    pub parameters: ParameterValues,
}

impl PromptSession {
    /// Session with parameters seeded from the config defaults.
    pub fn with_defaults(parameters: &ParametersConfig) -> Result<Self, AppError> {
        Ok(Self { selection: Selection::new(), parameters: parameters.defaults()? })
    }

    pub fn render(&self) -> String {
        assemble(self.selection.entries(), self.selection.subject(), &self.parameters)
    }

    pub fn render_flat(&self) -> String {
        assemble_flat(&self.selection.texts(), &self.parameters)
    }

    pub fn reset_parameters(&mut self, config: &ParametersConfig) -> Result<(), AppError> {
        config.reset_all(&mut self.parameters)
    }
}
