//! Settings discovery and config-store resolution.
//!
//! Resolution order for the catalog directory:
//! - `--config-dir`
//! - `config_dir` from the settings file
//! - the defaults embedded in the binary

mod load_settings;
mod resolve_store;

pub use load_settings::{LoadedSettings, load_settings};
pub use resolve_store::{ConfigOptions, ConfigSource, resolve_store};
