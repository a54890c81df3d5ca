//! Consistency checks for `parameters.yaml`.

use std::collections::HashSet;

use super::definition::{DefaultValue, ParameterControl, ParametersConfig};
use super::key::ParameterKind;
use super::values::ParameterValue;
use crate::domain::Diagnostics;

const FILE: &str = "parameters.yaml";

pub fn validate_parameters(config: &ParametersConfig) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();
    let mut seen = HashSet::new();

    for definition in &config.parameters {
        let id = &definition.id;
        let Some(key) = definition.key() else {
            diagnostics.push_error(FILE, format!("unknown parameter id '{}'", id));
            continue;
        };
        if !seen.insert(key) {
            diagnostics.push_error(FILE, format!("duplicate parameter '{}'", key));
            continue;
        }

        // Unquoted numbers lose their written form (`5.0` reads back as `5`).
        if key.kind() == ParameterKind::Text
            && let DefaultValue::Number(number) = definition.default
        {
            diagnostics.push_warning(
                FILE,
                format!(
                    "parameter '{}' default {} is a number; quote it to keep it as text",
                    id, number
                ),
            );
        }

        let default = match definition.default_value(key) {
            Ok(value) => value,
            Err(err) => {
                diagnostics.push_error(FILE, format!("parameter '{}' default: {}", id, err));
                continue;
            }
        };

        match &definition.control {
            ParameterControl::Slider { min, max, step } => {
                if min > max {
                    diagnostics.push_error(
                        FILE,
                        format!("parameter '{}' has min {} greater than max {}", id, min, max),
                    );
                } else if let ParameterValue::Number(value) = default
                    && (value < *min || value > *max)
                {
                    diagnostics.push_error(
                        FILE,
                        format!(
                            "parameter '{}' default {} is outside [{}, {}]",
                            id, value, min, max
                        ),
                    );
                }
                if *step <= 0.0 {
                    diagnostics
                        .push_warning(FILE, format!("parameter '{}' has non-positive step", id));
                }
            }
            ParameterControl::Select { options } => {
                if options.is_empty() {
                    diagnostics.push_warning(FILE, format!("parameter '{}' has no options", id));
                } else if let ParameterValue::Text(value) = &default
                    && !options.iter().any(|o| o.value == *value)
                {
                    diagnostics.push_warning(
                        FILE,
                        format!("parameter '{}' default '{}' is not among its options", id, value),
                    );
                }
            }
            ParameterControl::Input { .. } | ParameterControl::Checkbox { .. } => {}
        }
    }

    diagnostics
}
