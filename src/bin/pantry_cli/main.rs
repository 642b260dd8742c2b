// ABOUTME: Pantry CLI - command-line front end for the recipe resolution engine
// ABOUTME: Finds recipes for selected ingredients, shows customization ideas, lists choices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Recipes for what is in the fridge
//! pantry-cli find --ingredient Chicken --ingredient Rice
//!
//! # Same, rewritten for a vegan diet, as JSON
//! pantry-cli find -i Chicken -i Rice --restriction Vegan --format json
//!
//! # Substitution ideas for one recipe
//! pantry-cli customize "Broccoli Sticks"
//!
//! # Ingredients and restrictions to choose from
//! pantry-cli ingredients
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use pantry_resolver::config::{EngineConfig, OutputFormat};
use pantry_resolver::constants::service_names;
use pantry_resolver::errors::AppResult;
use pantry_resolver::logging::LoggingConfig;
use pantry_resolver::services::RecipeService;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "pantry-cli",
    about = "Find recipes for the ingredients you have",
    long_about = "Ranks recipes by how many of your ingredients they use and rewrites them to fit dietary restrictions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: text or json (defaults to PANTRY_OUTPUT_FORMAT, then text)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rank and resolve recipes for selected ingredients
    Find {
        /// Ingredient you have (repeatable)
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,

        /// Dietary restriction to honor, e.g. Vegan or Gluten-Free (repeatable)
        #[arg(long = "restriction", short = 'r')]
        restrictions: Vec<String>,
    },

    /// Show a recipe with substitution suggestions
    Customize {
        /// Recipe name
        recipe: String,
    },

    /// List selectable ingredients and dietary restrictions
    Ingredients,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("Error: {e}");
            ExitCode::from(e.code.exit_status())
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env_for(service_names::PANTRY_CLI);
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = EngineConfig::from_env()?;
    let format = cli
        .format
        .as_deref()
        .map_or(config.output_format, OutputFormat::from_str_or_default);
    info!(%format, max_results = ?config.max_results, "Pantry CLI");

    let service = RecipeService::new(config);

    match cli.command {
        Command::Find {
            ingredients,
            restrictions,
        } => commands::recipes::find(&service, ingredients, &restrictions, format),
        Command::Customize { recipe } => commands::recipes::customize(&service, &recipe, format),
        Command::Ingredients => commands::recipes::ingredients(&service, format),
    }
}
