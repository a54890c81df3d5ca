//! One-shot prompt assembly from selectors, a subject and parameter overrides.

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::prompt::is_valid;
use crate::domain::{
    AddOutcome, AppError, FragmentKey, ParameterKey, PromptSession, SelectionEntry,
};
use crate::ports::{ClipboardWriter, ConfigStore};

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Fragment selectors in the order they are applied.
    pub selectors: Vec<String>,
    pub subject: Option<String>,
    /// Example id whose full text becomes the subject.
    pub example: Option<String>,
    /// `KEY=VALUE` parameter assignments.
    pub params: Vec<String>,
    /// Start from unset parameters instead of the configured defaults.
    pub no_defaults: bool,
    /// Join fragment texts in selection order, without grouping or subject.
    pub flat: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedSelector {
    pub selector: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    pub prompt: String,
    pub selected: Vec<SelectionEntry>,
    pub skipped: Vec<SkippedSelector>,
}

pub fn execute<C: ConfigStore>(
    ctx: &AppContext<C>,
    options: &BuildOptions,
) -> Result<BuildOutcome, AppError> {
    let prompts = ctx.store().load_prompts()?;
    let parameters = ctx.store().load_parameters()?;

    let mut session = if options.no_defaults {
        PromptSession::default()
    } else {
        PromptSession::with_defaults(&parameters)?
    };

    for assignment in &options.params {
        let (key, value) = parse_assignment(assignment)?;
        parameters.apply(&mut session.parameters, key, value)?;
    }

    let mut skipped = Vec::new();
    for selector in &options.selectors {
        let key = FragmentKey::parse(selector)?;
        let reason = match session.selection.add(&prompts, &key) {
            AddOutcome::Added => continue,
            AddOutcome::AlreadySelected => "already selected",
            AddOutcome::UnknownFragment => "not in catalog",
        };
        skipped.push(SkippedSelector { selector: selector.clone(), reason: reason.to_string() });
    }

    let subject = match (&options.example, &options.subject) {
        (Some(id), _) => prompts
            .example(id)
            .map(|example| example.full_text.clone())
            .ok_or_else(|| AppError::ExampleNotFound(id.clone()))?,
        (None, Some(subject)) => subject.clone(),
        (None, None) => String::new(),
    };
    session.selection.set_subject(subject);

    let prompt = if options.flat { session.render_flat() } else { session.render() };
    Ok(BuildOutcome { prompt, selected: session.selection.entries().to_vec(), skipped })
}

/// Split `KEY=VALUE`. The value is kept verbatim.
pub fn parse_assignment(assignment: &str) -> Result<(ParameterKey, &str), AppError> {
    let (key, value) =
        assignment.split_once('=').ok_or_else(|| AppError::InvalidParameterValue {
            key: assignment.to_string(),
            value: String::new(),
            reason: "expected KEY=VALUE".to_string(),
        })?;
    Ok((ParameterKey::parse(key)?, value))
}

/// Copy `prompt` to the clipboard, refusing a blank prompt.
pub fn copy_prompt<W: ClipboardWriter>(clipboard: &mut W, prompt: &str) -> Result<(), AppError> {
    if !is_valid(prompt) {
        return Err(AppError::EmptyPrompt);
    }
    clipboard.write_text(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Settings;
    use crate::testing::{MemoryConfigStore, MockClipboard};

    fn ctx() -> AppContext<MemoryConfigStore> {
        AppContext::new(MemoryConfigStore::sample(), Settings::default())
    }

    fn options(selectors: &[&str]) -> BuildOptions {
        BuildOptions {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn groups_selection_and_applies_defaults() {
        let mut opts = options(&["lighting/golden", "camera/lens/wide", "artist/ansel"]);
        opts.subject = Some("  a lone lighthouse ".to_string());

        let outcome = execute(&ctx(), &opts).unwrap();
        assert_eq!(
            outcome.prompt,
            "photography by Ansel Adams, wide angle, a lone lighthouse, golden hour --ar 1:1"
        );
        assert_eq!(outcome.selected.len(), 3);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn no_defaults_starts_from_unset_parameters() {
        let mut opts = options(&["lighting/golden"]);
        opts.no_defaults = true;
        opts.subject = Some("a lone lighthouse".to_string());
        opts.params = vec!["ar=16:9".to_string(), "stylize=250".to_string()];

        let outcome = execute(&ctx(), &opts).unwrap();
        assert_eq!(outcome.prompt, "photography, a lone lighthouse, golden hour --ar 16:9 --s 250");
    }

    #[test]
    fn unknown_and_duplicate_selectors_are_skipped() {
        let outcome =
            execute(&ctx(), &options(&["mood/calm", "mood/missing", "mood/calm"])).unwrap();
        assert_eq!(outcome.selected.len(), 1);
        assert_eq!(
            outcome.skipped,
            vec![
                SkippedSelector {
                    selector: "mood/missing".to_string(),
                    reason: "not in catalog".to_string()
                },
                SkippedSelector {
                    selector: "mood/calm".to_string(),
                    reason: "already selected".to_string()
                },
            ]
        );
    }

    #[test]
    fn malformed_selector_is_an_error() {
        let err = execute(&ctx(), &options(&["mood"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidSelector(_)));
    }

    #[test]
    fn example_supplies_the_subject() {
        let mut opts = options(&[]);
        opts.example = Some("lighthouse".to_string());
        opts.no_defaults = true;
        let outcome = execute(&ctx(), &opts).unwrap();
        assert_eq!(outcome.prompt, "photography, a lone lighthouse on a cliff");

        opts.example = Some("desert".to_string());
        assert!(matches!(execute(&ctx(), &opts).unwrap_err(), AppError::ExampleNotFound(_)));
    }

    #[test]
    fn flat_mode_keeps_selection_order() {
        let mut opts = options(&["lighting/golden", "artist/ansel"]);
        opts.flat = true;
        opts.no_defaults = true;
        assert_eq!(execute(&ctx(), &opts).unwrap().prompt, "golden hour, Ansel Adams");
    }

    #[test]
    fn parameter_values_are_checked_against_definitions() {
        let mut opts = options(&[]);
        opts.params = vec!["stylize=5000".to_string()];
        assert!(matches!(
            execute(&ctx(), &opts).unwrap_err(),
            AppError::InvalidParameterValue { .. }
        ));

        opts.params = vec!["ar".to_string()];
        assert!(execute(&ctx(), &opts).is_err());

        opts.params = vec!["zoom=2".to_string()];
        assert!(matches!(execute(&ctx(), &opts).unwrap_err(), AppError::UnknownParameter(_)));
    }

    #[test]
    fn assignment_keeps_value_verbatim() {
        let (key, value) = parse_assignment("style=  raw ").unwrap();
        assert_eq!(key, ParameterKey::Style);
        assert_eq!(value, "  raw ");
    }

    #[test]
    fn copy_refuses_blank_prompt() {
        let mut clipboard = MockClipboard::new();
        assert!(matches!(copy_prompt(&mut clipboard, "   "), Err(AppError::EmptyPrompt)));
        assert_eq!(clipboard.written(), None);

        copy_prompt(&mut clipboard, "photography --tile").unwrap();
        assert_eq!(clipboard.written().as_deref(), Some("photography --tile"));

        let mut failing = MockClipboard::failing();
        assert!(matches!(
            copy_prompt(&mut failing, "photography"),
            Err(AppError::ClipboardError(_))
        ));
    }
}
