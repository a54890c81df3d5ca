use crate::app::api::{self, CheckOptions};
use crate::app::commands::check::emit;
use crate::app::config::ConfigOptions;
use crate::domain::AppError;

pub fn run_check(config: &ConfigOptions, strict: bool) -> Result<i32, AppError> {
    let outcome = api::check(config, &CheckOptions { strict })?;
    emit(&outcome.diagnostics);

    let (errors, warnings) = (outcome.errors(), outcome.warnings());
    if errors == 0 && warnings == 0 {
        println!("✅ Config from {} is valid", outcome.source);
    } else if errors == 0 && !strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(outcome.exit_code)
}
