//! API Facade for the application.
//!
//! Resolves settings and the config store, then runs commands against them.

use std::path::Path;

use crate::app::AppContext;
use crate::app::commands::{build, check};
use crate::app::config::{ConfigSource, resolve_store};
use crate::domain::AppError;

pub use crate::app::commands::build::{BuildOptions, BuildOutcome, SkippedSelector};
pub use crate::app::commands::check::{CheckOptions, CheckOutcome};
pub use crate::app::config::ConfigOptions;

/// Open a context relative to the current directory.
pub fn open(config: &ConfigOptions) -> Result<AppContext<ConfigSource>, AppError> {
    open_at(&std::env::current_dir()?, config)
}

/// Open a context with `cwd` as the base for settings discovery and relative paths.
pub fn open_at(cwd: &Path, config: &ConfigOptions) -> Result<AppContext<ConfigSource>, AppError> {
    let (store, loaded) = resolve_store(config, cwd)?;
    Ok(AppContext::new(store, loaded.settings))
}

/// Assemble a prompt using config resolved from the current directory.
pub fn build(config: &ConfigOptions, options: &BuildOptions) -> Result<BuildOutcome, AppError> {
    build_at(&std::env::current_dir()?, config, options)
}

pub fn build_at(
    cwd: &Path,
    config: &ConfigOptions,
    options: &BuildOptions,
) -> Result<BuildOutcome, AppError> {
    let ctx = open_at(cwd, config)?;
    build::execute(&ctx, options)
}

/// Validate the resolved config files.
pub fn check(config: &ConfigOptions, options: &CheckOptions) -> Result<CheckOutcome, AppError> {
    check_at(&std::env::current_dir()?, config, options)
}

pub fn check_at(
    cwd: &Path,
    config: &ConfigOptions,
    options: &CheckOptions,
) -> Result<CheckOutcome, AppError> {
    let ctx = open_at(cwd, config)?;
    Ok(check::execute(ctx.store(), options))
}
