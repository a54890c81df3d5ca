//! Editing operations behind the interactive `compose` session.

use super::build::copy_prompt;
use crate::domain::{
    AddOutcome, AppError, FragmentKey, ParameterKey, ParametersConfig, PromptSession,
    PromptsConfig, ToggleOutcome,
};
use crate::ports::ClipboardWriter;

/// One user edit applied to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ComposeAction {
    Add(FragmentKey),
    Remove(FragmentKey),
    Toggle(FragmentKey),
    /// Move the entry at `from` to `to` (zero-based positions).
    Move { from: usize, to: usize },
    Subject(String),
    Example(String),
    SetParameter { key: ParameterKey, raw: String },
    ResetParameter(ParameterKey),
    ResetParameters,
    Clear,
}

pub struct Composer<'a> {
    prompts: &'a PromptsConfig,
    parameters: &'a ParametersConfig,
    session: PromptSession,
}

impl<'a> Composer<'a> {
    /// Start a session with parameters at their configured defaults.
    pub fn new(
        prompts: &'a PromptsConfig,
        parameters: &'a ParametersConfig,
    ) -> Result<Self, AppError> {
        let session = PromptSession::with_defaults(parameters)?;
        Ok(Self { prompts, parameters, session })
    }

    pub fn prompts(&self) -> &PromptsConfig {
        self.prompts
    }

    pub fn parameters(&self) -> &ParametersConfig {
        self.parameters
    }

    pub fn session(&self) -> &PromptSession {
        &self.session
    }

    pub fn prompt(&self) -> String {
        self.session.render()
    }

    /// Apply `action` and describe what changed.
    pub fn apply(&mut self, action: ComposeAction) -> Result<String, AppError> {
        let selection = &mut self.session.selection;
        let message = match action {
            ComposeAction::Add(key) => match selection.add(self.prompts, &key) {
                AddOutcome::Added => format!("Added {}", key),
                AddOutcome::AlreadySelected => format!("{} is already selected", key),
                AddOutcome::UnknownFragment => format!("{} is not in the catalog", key),
            },
            ComposeAction::Remove(key) => {
                if selection.remove(&key) {
                    format!("Removed {}", key)
                } else {
                    format!("{} was not selected", key)
                }
            }
            ComposeAction::Toggle(key) => match selection.toggle(self.prompts, &key) {
                ToggleOutcome::Added => format!("Added {}", key),
                ToggleOutcome::Removed => format!("Removed {}", key),
                ToggleOutcome::UnknownFragment => format!("{} is not in the catalog", key),
            },
            ComposeAction::Move { from, to } => {
                selection.reorder(from, to)?;
                format!("Moved entry {} to position {}", from + 1, to + 1)
            }
            ComposeAction::Subject(subject) => {
                let cleared = subject.trim().is_empty();
                selection.set_subject(subject);
                if cleared { "Subject cleared".to_string() } else { "Subject set".to_string() }
            }
            ComposeAction::Example(id) => {
                let example =
                    self.prompts.example(&id).ok_or_else(|| AppError::ExampleNotFound(id))?;
                selection.set_subject(example.full_text.clone());
                format!("Subject set from example '{}'", example.title)
            }
            ComposeAction::SetParameter { key, raw } => {
                self.parameters.apply(&mut self.session.parameters, key, &raw)?;
                format!("{} = {}", key, raw)
            }
            ComposeAction::ResetParameter(key) => {
                self.parameters.reset(&mut self.session.parameters, key)?;
                format!("{} reset to default", key)
            }
            ComposeAction::ResetParameters => {
                self.parameters.reset_all(&mut self.session.parameters)?;
                "Parameters reset to defaults".to_string()
            }
            ComposeAction::Clear => {
                selection.clear();
                "Selection cleared".to_string()
            }
        };
        Ok(message)
    }

    pub fn copy<W: ClipboardWriter>(&self, clipboard: &mut W) -> Result<(), AppError> {
        copy_prompt(clipboard, &self.prompt())
    }
}
