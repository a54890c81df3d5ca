//! mjp: compose Midjourney prompts from a catalog of prompt fragments.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    BuildOptions, BuildOutcome, CheckOptions, CheckOutcome, ConfigOptions, SkippedSelector,
    build, build_at, check, check_at, open, open_at,
};
pub use domain::prompt::{assemble, assemble_flat, is_valid, parameter_flags};
pub use domain::{
    AppError, FragmentKey, ParameterKey, ParameterValue, ParameterValues, ParametersConfig,
    PositionTag, PromptSession, PromptsConfig, Selection, SelectionEntry,
};
