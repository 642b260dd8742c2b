// ABOUTME: Integration tests for the recipe service facade and its environment configuration
// ABOUTME: Tests label normalization, result caps, selection menu, and env overrides
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pantry_resolver::config::{ConfigError, EngineConfig, OutputFormat};
use pantry_resolver::constants::service_names;
use pantry_resolver::errors::{AppError, ErrorCode};
use pantry_resolver::logging::{LogFormat, LoggingConfig};
use pantry_resolver::models::DietaryRestriction;
use pantry_resolver::services::RecipeService;
use serial_test::serial;
use std::env;
use std::num::NonZeroUsize;

const EMPTY: [&str; 0] = [];

fn capped(limit: usize) -> RecipeService {
    RecipeService::new(EngineConfig {
        max_results: NonZeroUsize::new(limit),
        ..EngineConfig::default()
    })
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_find_recipes_reports_normalized_input() {
    let report = RecipeService::default().find_recipes(
        ["Chicken", "Rice", "Chicken", ""],
        [" Vegan ", " "],
    );

    assert_eq!(report.selected_ingredients, vec!["Chicken", "Rice"]);
    assert!(report.restrictions.contains(&DietaryRestriction::Vegan));
    assert_eq!(report.restrictions.len(), 1);
    assert_eq!(report.recipes.len(), 1);
    assert_eq!(report.recipes[0].ingredients, vec!["Tofu", "Rice"]);
}

#[test]
fn test_find_recipes_keeps_inexact_labels_as_custom() {
    let report = RecipeService::default().find_recipes(["Chicken", "Rice"], ["gluten free"]);

    assert!(!report.restrictions.contains(&DietaryRestriction::GlutenFree));
    assert!(report
        .restrictions
        .contains(&DietaryRestriction::Custom("gluten free".to_owned())));
    // Rice is not excluded, so the bowl survives with the preferred substitute
    assert_eq!(report.recipes.len(), 1);
    assert_eq!(report.recipes[0].ingredients, vec!["Tofu", "Rice"]);
}

#[test]
fn test_find_recipes_blank_restrictions_run_unconstrained() {
    let report = RecipeService::default().find_recipes(["Chicken", "Rice"], [""]);

    assert!(report.restrictions.is_empty());
    assert_eq!(report.recipes[0].ingredients, vec!["Chicken", "Rice"]);
    assert!(!report.recipes[0].substituted);
}

#[test]
fn test_find_recipes_empty_selection() {
    let report = RecipeService::default().find_recipes(EMPTY, EMPTY);
    assert!(report.selected_ingredients.is_empty());
    assert!(report.recipes.is_empty());
}

#[test]
fn test_max_results_caps_after_resolution() {
    let service = capped(2);
    let report = service.find_recipes(["Potato", "Onion", "Garlic", "Carrot"], EMPTY);

    let names: Vec<&str> = report.recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Potato Soup", "Vegetable Stir Fry"]);
}

#[test]
fn test_max_results_counts_only_feasible_recipes() {
    // Chicken Bowl ranks first but is dropped before the cap is applied
    let report = capped(1).find_recipes(["Chicken", "Rice", "Broccoli"], ["Gluten-Free"]);

    assert_eq!(report.recipes.len(), 1);
    assert_eq!(report.recipes[0].name, "Broccoli Sticks");
}

#[test]
fn test_report_serializes_with_labels() {
    let report = RecipeService::default().find_recipes(["Chicken", "Rice"], ["Vegan"]);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["restrictions"], serde_json::json!(["Vegan"]));
    assert_eq!(json["recipes"][0]["name"], "Chicken Bowl");
    assert_eq!(json["recipes"][0]["substituted"], true);
}

// ============================================================================
// Customization and menu
// ============================================================================

#[test]
fn test_service_customize_delegates_to_catalog() {
    let service = RecipeService::default();
    assert!(service.customize("Potato Soup").is_found());
    assert!(!service.customize("Potato Salad").is_found());
}

#[test]
fn test_selection_menu_lists_ui_choices() {
    let menu = RecipeService::default().selection_menu();

    assert_eq!(menu.ingredients.len(), 12);
    assert!(menu.ingredients.iter().any(|i| i == "Eggplant"));
    assert_eq!(menu.restrictions, vec!["Vegan", "Gluten-Free"]);
}

// ============================================================================
// Environment configuration
// ============================================================================

#[test]
#[serial]
fn test_engine_config_from_env() {
    env::set_var("PANTRY_MAX_RESULTS", "3");
    env::set_var("PANTRY_OUTPUT_FORMAT", "JSON");

    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.max_results, NonZeroUsize::new(3));
    assert_eq!(config.output_format, OutputFormat::Json);

    env::remove_var("PANTRY_MAX_RESULTS");
    env::remove_var("PANTRY_OUTPUT_FORMAT");
}

#[test]
#[serial]
fn test_engine_config_unknown_format_falls_back_to_text() {
    env::set_var("PANTRY_OUTPUT_FORMAT", "yaml");

    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.output_format, OutputFormat::Text);
    assert!(config.max_results.is_none());

    env::remove_var("PANTRY_OUTPUT_FORMAT");
}

#[test]
#[serial]
fn test_engine_config_invalid_max_results_maps_to_config_error() {
    env::set_var("PANTRY_MAX_RESULTS", "-1");

    let err = EngineConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));

    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ConfigInvalid);

    env::remove_var("PANTRY_MAX_RESULTS");
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.environment, "production");

    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
}

#[test]
#[serial]
fn test_logging_service_name_defaults_per_binary() {
    env::remove_var("SERVICE_NAME");

    assert_eq!(LoggingConfig::from_env().service_name, service_names::PANTRY_RESOLVER);
    assert_eq!(
        LoggingConfig::from_env_for(service_names::PANTRY_CLI).service_name,
        "pantry-cli"
    );

    env::set_var("SERVICE_NAME", "pantry-batch");
    assert_eq!(
        LoggingConfig::from_env_for(service_names::PANTRY_CLI).service_name,
        "pantry-batch"
    );
    env::remove_var("SERVICE_NAME");
}
