//! Typed model of `parameters.yaml`.

use serde::{Deserialize, Serialize};

use super::key::ParameterKey;
use super::values::{ParameterValue, ParameterValues};
use crate::domain::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// UI control describing the accepted values of a parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterControl {
    Select {
        #[serde(default)]
        options: Vec<SelectOption>,
    },
    Slider {
        min: f64,
        max: f64,
        #[serde(default = "default_step")]
        step: f64,
    },
    Input {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Checkbox {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

fn default_step() -> f64 {
    1.0
}

impl ParameterControl {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterControl::Select { .. } => "select",
            ParameterControl::Slider { .. } => "slider",
            ParameterControl::Input { .. } => "input",
            ParameterControl::Checkbox { .. } => "checkbox",
        }
    }
}

/// Default as written in YAML, before it is typed against its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Switch(bool),
    Number(f64),
    Text(String),
}

impl DefaultValue {
    pub fn raw(&self) -> String {
        match self {
            DefaultValue::Switch(on) => on.to_string(),
            DefaultValue::Number(number) => number.to_string(),
            DefaultValue::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub id: String,
    pub name: String,
    /// Flag text shown next to the control (e.g. `--ar`).
    #[serde(default)]
    pub param: String,
    pub default: DefaultValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub control: ParameterControl,
}

impl ParameterDefinition {
    pub fn key(&self) -> Option<ParameterKey> {
        ParameterKey::from_id(&self.id)
    }

    /// Default typed against `key`.
    pub fn default_value(&self, key: ParameterKey) -> Result<ParameterValue, AppError> {
        ParameterValue::parse(key, &self.default.raw())
    }

    /// Check `value` against slider bounds and select options.
    pub fn check_value(&self, value: &ParameterValue) -> Result<(), AppError> {
        let invalid = |reason: String| AppError::InvalidParameterValue {
            key: self.id.clone(),
            value: value.to_string(),
            reason,
        };

        match (&self.control, value) {
            (ParameterControl::Slider { min, max, .. }, ParameterValue::Number(number)) => {
                if number < min || number > max {
                    return Err(invalid(format!("must be between {} and {}", min, max)));
                }
            }
            (ParameterControl::Select { options }, ParameterValue::Text(text)) => {
                if !options.is_empty() && !options.iter().any(|o| o.value == *text) {
                    let allowed: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
                    return Err(invalid(format!("must be one of {}", allowed.join(", "))));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Root of `parameters.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParametersConfig {
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
}

impl ParametersConfig {
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|err| AppError::yaml("parameters.yaml", err))
    }

    pub fn definition(&self, key: ParameterKey) -> Option<&ParameterDefinition> {
        self.parameters.iter().find(|p| p.key() == Some(key))
    }

    /// Values seeded from every definition's default. Definitions with an
    /// unknown id are skipped.
    pub fn defaults(&self) -> Result<ParameterValues, AppError> {
        let mut values = ParameterValues::new();
        for definition in &self.parameters {
            let Some(key) = definition.key() else {
                tracing::debug!(id = %definition.id, "skipping unknown parameter definition");
                continue;
            };
            values.set_value(key, definition.default_value(key)?)?;
        }
        Ok(values)
    }

    /// Parse `raw`, check it against the definition if one exists, and store it.
    pub fn apply(
        &self,
        values: &mut ParameterValues,
        key: ParameterKey,
        raw: &str,
    ) -> Result<(), AppError> {
        let value = ParameterValue::parse(key, raw)?;
        if let Some(definition) = self.definition(key) {
            definition.check_value(&value)?;
        }
        values.set_value(key, value)
    }

    /// Restore one parameter to its default, or unset it when undefined.
    pub fn reset(&self, values: &mut ParameterValues, key: ParameterKey) -> Result<(), AppError> {
        match self.definition(key) {
            Some(definition) => values.set_value(key, definition.default_value(key)?),
            None => {
                values.unset(key);
                Ok(())
            }
        }
    }

    pub fn reset_all(&self, values: &mut ParameterValues) -> Result<(), AppError> {
        *values = self.defaults()?;
        Ok(())
    }
}
