// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pantry-cli
// ABOUTME: Provides consistent text rendering for reports, customizations, and menus

use pantry_resolver::models::{RecipeCustomization, ResolutionReport};
use pantry_resolver::services::SelectionMenu;

/// Display ranked and resolved recipes
pub fn display_report(report: &ResolutionReport) {
    println!("\nSelected: {}", report.selected_ingredients.join(", "));
    if !report.restrictions.is_empty() {
        println!("Restrictions: {}", report.restrictions.labels().join(", "));
    }
    println!("{}", "=".repeat(60));

    if report.recipes.is_empty() {
        println!("No recipes match your ingredients and restrictions.");
        return;
    }

    for (rank, recipe) in report.recipes.iter().enumerate() {
        let marker = if recipe.substituted {
            " [substituted]"
        } else {
            ""
        };
        println!("{}. {} ({}){marker}", rank + 1, recipe.name, recipe.prep_time);
        println!("   Ingredients: {}", recipe.ingredients.join(", "));
        println!("   {}", recipe.instructions);
    }
}

/// Display one recipe and the substitution ideas
pub fn display_customization(requested: &str, customization: &RecipeCustomization) {
    match &customization.recipe {
        Some(recipe) => {
            println!("\n{} ({})", recipe.name, recipe.prep_time);
            println!("{}", "=".repeat(60));
            println!("Ingredients: {}", recipe.ingredients.join(", "));
            println!("{}", recipe.instructions);
        }
        None => println!("\nNo recipe named '{requested}'."),
    }

    println!("\nSubstitution ideas:");
    for suggestion in &customization.suggestions {
        println!(
            "   {} -> {}",
            suggestion.ingredient,
            suggestion.alternatives.join(" or ")
        );
    }
}

/// Display the selectable ingredients and restrictions
pub fn display_menu(menu: &SelectionMenu) {
    println!("\nIngredients:");
    for ingredient in &menu.ingredients {
        println!("   {ingredient}");
    }
    println!("\nDietary restrictions:");
    for restriction in &menu.restrictions {
        println!("   {restriction}");
    }
}
