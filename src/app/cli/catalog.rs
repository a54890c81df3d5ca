use clap::Subcommand;

use crate::app::api;
use crate::app::commands::catalog;
use crate::app::config::ConfigOptions;
use crate::domain::AppError;
use crate::ports::ConfigStore;

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List categories with their position in the prompt
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// List the fragments of a category with their selectors
    Show {
        /// Category id
        category: String,
        #[arg(long)]
        json: bool,
    },
    /// List parameter definitions
    Params {
        #[arg(long)]
        json: bool,
    },
    /// List ready-made subject/environment examples
    Examples {
        #[arg(long)]
        json: bool,
    },
}

pub fn run_catalog(config: &ConfigOptions, command: CatalogCommands) -> Result<(), AppError> {
    let ctx = api::open(config)?;

    match command {
        CatalogCommands::Categories { json } => {
            let prompts = ctx.store().load_prompts()?;
            let summaries = catalog::categories(&prompts);
            if json {
                return super::print_json(&summaries);
            }
            for summary in &summaries {
                let nested = if summary.sub_categories.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", summary.sub_categories.join(", "))
                };
                println!(
                    "{:<16} {:<9} {:>4}  {}{}",
                    summary.id,
                    summary.position_tag.as_str(),
                    summary.fragment_count,
                    summary.name,
                    nested
                );
            }
        }
        CatalogCommands::Show { category, json } => {
            let prompts = ctx.store().load_prompts()?;
            let detail = catalog::show(&prompts, &category, ctx.language())?;
            if json {
                return super::print_json(&detail);
            }
            let summary = &detail.summary;
            println!("{} ({}, {})", summary.name, summary.id, summary.position_tag);
            if let Some(hint) = &summary.single_selection_hint {
                println!("⚠️  {}", hint);
            }
            for fragment in &detail.fragments {
                if fragment.label == fragment.text {
                    println!("  {:<36} {}", fragment.selector, fragment.text);
                } else {
                    println!("  {:<36} {} ({})", fragment.selector, fragment.label, fragment.text);
                }
            }
        }
        CatalogCommands::Params { json } => {
            let parameters = ctx.store().load_parameters()?;
            let listing = catalog::params(&parameters);
            if json {
                return super::print_json(&listing);
            }
            for param in &listing {
                println!(
                    "{:<14} {:<8} {:<9} default={:<6} {}",
                    param.id, param.flag, param.control, param.default, param.accepts
                );
            }
        }
        CatalogCommands::Examples { json } => {
            let prompts = ctx.store().load_prompts()?;
            let examples = catalog::examples(&prompts);
            if json {
                return super::print_json(examples);
            }
            for example in examples {
                println!("{:<16} {}", example.id, example.title);
                println!("  {}", example.full_text);
            }
        }
    }
    Ok(())
}
