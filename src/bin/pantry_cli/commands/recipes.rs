// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Recipe commands for pantry-cli
// ABOUTME: Runs searches and lookups through RecipeService and renders the output

use crate::helpers::display;
use pantry_resolver::config::OutputFormat;
use pantry_resolver::errors::AppResult;
use pantry_resolver::services::RecipeService;
use serde::Serialize;

/// Find recipes for the given ingredients and restriction labels
///
/// An empty selection is not an error; it simply matches nothing.
pub fn find(
    service: &RecipeService,
    ingredients: Vec<String>,
    restrictions: &[String],
    format: OutputFormat,
) -> AppResult<()> {
    let report = service.find_recipes(ingredients, restrictions);
    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            display::display_report(&report);
            Ok(())
        }
    }
}

/// Show one recipe with substitution suggestions
pub fn customize(service: &RecipeService, recipe: &str, format: OutputFormat) -> AppResult<()> {
    let customization = service.customize(recipe);
    match format {
        OutputFormat::Json => print_json(&customization),
        OutputFormat::Text => {
            display::display_customization(recipe, &customization);
            Ok(())
        }
    }
}

/// List what a user can choose from
pub fn ingredients(service: &RecipeService, format: OutputFormat) -> AppResult<()> {
    let menu = service.selection_menu();
    match format {
        OutputFormat::Json => print_json(&menu),
        OutputFormat::Text => {
            display::display_menu(&menu);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
