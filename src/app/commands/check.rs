use crate::domain::catalog::validate_prompts;
use crate::domain::parameters::validate_parameters;
use crate::domain::{AppError, Diagnostics};
use crate::ports::{ConfigStore, PARAMETERS_FILE, PROMPTS_FILE};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Treat warnings as failures.
    pub strict: bool,
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub source: String,
    pub diagnostics: Diagnostics,
    pub exit_code: i32,
}

impl CheckOutcome {
    pub fn errors(&self) -> usize {
        self.diagnostics.error_count()
    }

    pub fn warnings(&self) -> usize {
        self.diagnostics.warning_count()
    }
}

/// Validate both config files. Load failures are reported as errors rather
/// than returned.
pub fn execute<C: ConfigStore>(store: &C, options: &CheckOptions) -> CheckOutcome {
    let mut diagnostics = Diagnostics::default();

    match store.load_prompts() {
        Ok(prompts) => diagnostics.extend(validate_prompts(&prompts)),
        Err(err) => diagnostics.push_error(PROMPTS_FILE, load_failure(err)),
    }
    match store.load_parameters() {
        Ok(parameters) => diagnostics.extend(validate_parameters(&parameters)),
        Err(err) => diagnostics.push_error(PARAMETERS_FILE, load_failure(err)),
    }

    let exit_code = if diagnostics.has_errors() {
        1
    } else if diagnostics.warning_count() > 0 && options.strict {
        2
    } else {
        0
    };

    CheckOutcome { source: store.source(), diagnostics, exit_code }
}

fn load_failure(err: AppError) -> String {
    match err {
        AppError::YamlParseError { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

pub fn emit(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.errors() {
        eprintln!("[ERROR] {}: {}", diagnostic.file, diagnostic.message);
    }
    for diagnostic in diagnostics.warnings() {
        eprintln!("[WARN] {}: {}", diagnostic.file, diagnostic.message);
    }
}
