pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod language;
pub mod parameters;
pub mod position_tag;
pub mod prompt;
pub mod selection;
pub mod settings;

pub use catalog::{
    Category, FragmentKey, PromptFragment, PromptsConfig, SubCategory, SubjectEnvironmentExample,
};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::AppError;
pub use language::Language;
pub use parameters::{ParameterKey, ParameterValue, ParameterValues, ParametersConfig};
pub use position_tag::PositionTag;
pub use prompt::{assemble, assemble_flat, is_valid};
pub use selection::{AddOutcome, PromptSession, Selection, SelectionEntry, ToggleOutcome};
pub use settings::Settings;
