use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::adapters::ArboardClipboard;
use crate::app::api;
use crate::app::commands::compose::{ComposeAction, Composer};
use crate::app::config::ConfigOptions;
use crate::domain::parameters::ParameterControl;
use crate::domain::{AppError, FragmentKey, Language, ParameterKey};
use crate::ports::ConfigStore;

const MENU_BACK_OPTION: &str = "[back]";
const MENU_RESET_OPTION: &str = "[reset to default]";

const ACTIONS: [&str; 10] = [
    "Toggle fragment",
    "Remove fragment",
    "Move fragment",
    "Set subject",
    "Use example subject",
    "Set parameter",
    "Reset all parameters",
    "Clear selection",
    "Copy to clipboard",
    "Quit",
];

pub fn run_compose(config: &ConfigOptions) -> Result<(), AppError> {
    let ctx = api::open(config)?;
    let prompts = ctx.store().load_prompts()?;
    let parameters = ctx.store().load_parameters()?;
    let language = ctx.language();
    let mut composer = Composer::new(&prompts, &parameters)?;

    loop {
        println!();
        println!("{}", composer.prompt());

        let Some(choice) = select("Action", &ACTIONS)? else {
            break;
        };
        let action = match choice {
            0 => pick_fragment(&composer, language)?.map(ComposeAction::Toggle),
            1 => pick_selected(&composer)?.map(ComposeAction::Remove),
            2 => pick_move(&composer)?,
            3 => read_text("Subject", composer.session().selection.subject())?
                .map(ComposeAction::Subject),
            4 => pick_example(&composer)?.map(ComposeAction::Example),
            5 => pick_parameter(&composer)?,
            6 => Some(ComposeAction::ResetParameters),
            7 => Some(ComposeAction::Clear),
            8 => {
                match copy_current(&composer) {
                    Ok(()) => println!("✅ Copied prompt to clipboard"),
                    Err(err) => eprintln!("⚠️  {}", err),
                }
                continue;
            }
            _ => break,
        };

        let Some(action) = action else {
            continue;
        };
        match composer.apply(action) {
            Ok(message) => println!("✅ {}", message),
            Err(err) => eprintln!("⚠️  {}", err),
        }
    }

    println!("{}", composer.prompt());
    Ok(())
}

fn copy_current(composer: &Composer<'_>) -> Result<(), AppError> {
    let mut clipboard = ArboardClipboard::new();
    composer.copy(&mut clipboard)
}

/// Menu choice, or `None` when the menu is dismissed or has nothing to pick.
fn select<T: ToString>(prompt: &str, items: &[T]) -> Result<Option<usize>, AppError> {
    if items.is_empty() {
        return Ok(None);
    }
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::PromptInput(format!("{}: {}", prompt, err)))
}

fn read_text(prompt: &str, initial: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::PromptInput(format!("{}: {}", prompt, err))),
    }
}

fn pick_fragment(
    composer: &Composer<'_>,
    language: Language,
) -> Result<Option<FragmentKey>, AppError> {
    let categories = &composer.prompts().categories;
    if categories.is_empty() {
        println!("The catalog has no categories");
        return Ok(None);
    }
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();

    loop {
        let Some(index) = select("Category", &names)? else {
            return Ok(None);
        };
        let category = &categories[index];
        if let Some(hint) = category.single_selection_hint() {
            println!("⚠️  {}", hint);
        }

        let selection = &composer.session().selection;
        let fragments = category.fragments();
        let mut items: Vec<String> = fragments
            .iter()
            .map(|(key, fragment)| {
                let marker = if selection.is_selected(key) { "✓" } else { " " };
                let label = fragment.label(language);
                match key.sub_category_id.as_deref() {
                    Some(sub) => {
                        let group = category.sub_category(sub).map_or(sub, |s| s.name.as_str());
                        format!("{} {} / {}", marker, group, label)
                    }
                    None => format!("{} {}", marker, label),
                }
            })
            .collect();
        items.push(MENU_BACK_OPTION.to_string());

        let Some(choice) = select("Fragment", &items)? else {
            return Ok(None);
        };
        if choice == items.len() - 1 {
            continue;
        }
        return Ok(Some(fragments[choice].0.clone()));
    }
}

fn pick_selected(composer: &Composer<'_>) -> Result<Option<FragmentKey>, AppError> {
    let entries = composer.session().selection.entries();
    if entries.is_empty() {
        println!("Nothing selected yet");
        return Ok(None);
    }
    let items: Vec<String> = entries.iter().map(|e| format!("{} ({})", e.text, e.key)).collect();
    Ok(select("Fragment", &items)?.map(|index| entries[index].key.clone()))
}

fn pick_move(composer: &Composer<'_>) -> Result<Option<ComposeAction>, AppError> {
    let entries = composer.session().selection.entries();
    if entries.len() < 2 {
        println!("Select at least two fragments to reorder");
        return Ok(None);
    }
    let items: Vec<String> =
        entries.iter().enumerate().map(|(i, e)| format!("{}. {}", i + 1, e.text)).collect();

    let Some(from) = select("Move which fragment", &items)? else {
        return Ok(None);
    };
    let Some(to) = select("To position", &items)? else {
        return Ok(None);
    };
    Ok(Some(ComposeAction::Move { from, to }))
}

fn pick_example(composer: &Composer<'_>) -> Result<Option<String>, AppError> {
    let examples = &composer.prompts().subject_environment_examples;
    if examples.is_empty() {
        println!("The catalog has no examples");
        return Ok(None);
    }
    let items: Vec<String> =
        examples.iter().map(|e| format!("{}: {}", e.title, e.full_text)).collect();
    Ok(select("Example", &items)?.map(|index| examples[index].id.clone()))
}

fn pick_parameter(composer: &Composer<'_>) -> Result<Option<ComposeAction>, AppError> {
    let values = &composer.session().parameters;
    let items: Vec<String> = ParameterKey::ALL
        .iter()
        .map(|key| {
            let current = values.get(*key).map(|v| v.to_string()).unwrap_or_default();
            format!("{:<14} {:<8} {}", key.id(), key.flag(), current)
        })
        .collect();

    let Some(index) = select("Parameter", &items)? else {
        return Ok(None);
    };
    let key = ParameterKey::ALL[index];

    let choices: Option<Vec<(String, String)>> =
        match composer.parameters().definition(key).map(|d| &d.control) {
            Some(ParameterControl::Select { options }) if !options.is_empty() => Some(
                options
                    .iter()
                    .map(|o| (o.value.clone(), format!("{} ({})", o.value, o.label)))
                    .collect(),
            ),
            Some(ParameterControl::Checkbox { .. }) => Some(vec![
                ("true".to_string(), "on".to_string()),
                ("false".to_string(), "off".to_string()),
            ]),
            _ => None,
        };

    let raw = match choices {
        Some(choices) => {
            let mut labels: Vec<&str> = choices.iter().map(|(_, label)| label.as_str()).collect();
            labels.push(MENU_RESET_OPTION);
            let Some(choice) = select(key.id(), &labels)? else {
                return Ok(None);
            };
            match choices.get(choice) {
                Some((value, _)) => value.clone(),
                None => return Ok(Some(ComposeAction::ResetParameter(key))),
            }
        }
        None => {
            let current = values.get(key).map(|v| v.to_string()).unwrap_or_default();
            let prompt = format!("{} (empty to reset)", key.id());
            let Some(raw) = read_text(&prompt, &current)? else {
                return Ok(None);
            };
            if raw.trim().is_empty() {
                return Ok(Some(ComposeAction::ResetParameter(key)));
            }
            raw
        }
    };
    Ok(Some(ComposeAction::SetParameter { key, raw }))
}
