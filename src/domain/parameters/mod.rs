mod definition;
mod key;
mod validation;
mod values;

pub use definition::{
    DefaultValue, ParameterControl, ParameterDefinition, ParametersConfig, SelectOption,
};
pub use key::{ParameterKey, ParameterKind};
pub use validation::validate_parameters;
pub use values::{ParameterValue, ParameterValues};
