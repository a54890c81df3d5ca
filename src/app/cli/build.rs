use clap::Args;

use crate::adapters::ArboardClipboard;
use crate::app::api::{self, BuildOptions};
use crate::app::commands::build::copy_prompt;
use crate::app::config::ConfigOptions;
use crate::domain::AppError;

#[derive(Args)]
pub struct BuildArgs {
    /// Fragment to include: CATEGORY/FRAGMENT or CATEGORY/SUBCATEGORY/FRAGMENT
    #[arg(short = 's', long = "select", value_name = "SELECTOR")]
    selectors: Vec<String>,
    /// Free-text subject and environment
    #[arg(long, conflicts_with = "example")]
    subject: Option<String>,
    /// Use a catalog example as the subject
    #[arg(short = 'e', long, value_name = "ID")]
    example: Option<String>,
    /// Parameter assignment, e.g. ar=16:9 or stylize=250
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    params: Vec<String>,
    /// Ignore parameter defaults from parameters.yaml
    #[arg(long)]
    no_defaults: bool,
    /// Join fragments in selection order without grouping or subject
    #[arg(long)]
    flat: bool,
    /// Copy the prompt to the clipboard
    #[arg(short = 'c', long)]
    copy: bool,
    /// Print the prompt and selection as JSON
    #[arg(long)]
    json: bool,
}

pub fn run_build(config: &ConfigOptions, args: BuildArgs) -> Result<(), AppError> {
    let options = BuildOptions {
        selectors: args.selectors,
        subject: args.subject,
        example: args.example,
        params: args.params,
        no_defaults: args.no_defaults,
        flat: args.flat,
    };
    let outcome = api::build(config, &options)?;

    for skipped in &outcome.skipped {
        eprintln!("⚠️  Skipped {}: {}", skipped.selector, skipped.reason);
    }

    if args.copy {
        let mut clipboard = ArboardClipboard::new();
        copy_prompt(&mut clipboard, &outcome.prompt)?;
    }

    if args.json {
        super::print_json(&outcome)?;
    } else {
        println!("{}", outcome.prompt);
    }

    if args.copy {
        eprintln!("✅ Copied prompt to clipboard");
    }
    Ok(())
}
