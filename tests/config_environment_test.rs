// ABOUTME: Tests for nutrition plan configuration defaults, validation, and env overrides
// ABOUTME: Environment tests run serially since they mutate process-wide NUTRIPLAN_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::config::{ConfigError, NutritionPlanConfig, ProteinRange};
use nutriplan::errors::{AppError, ErrorCode};
use nutriplan::intelligence::NutritionPlanCalculator;
use serial_test::serial;
use std::env;

mod common;

const OVERRIDE_VARS: [&str; 9] = [
    "NUTRIPLAN_SAFE_MIN_CALORIES_MALE",
    "NUTRIPLAN_SAFE_MIN_CALORIES_FEMALE",
    "NUTRIPLAN_KCAL_PER_KG",
    "NUTRIPLAN_FAT_MIN_FRACTION",
    "NUTRIPLAN_FAT_MAX_FRACTION",
    "NUTRIPLAN_DEFICIT_MIN",
    "NUTRIPLAN_DEFICIT_MAX",
    "NUTRIPLAN_SURPLUS_MIN",
    "NUTRIPLAN_SURPLUS_MAX",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// DEFAULTS AND VALIDATION
// ============================================================================

#[test]
fn test_default_config_validation() {
    let config = NutritionPlanConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_tables() {
    let config = NutritionPlanConfig::default();

    assert!((config.safety.safe_min_calories_male - 1500.0).abs() < f64::EPSILON);
    assert!((config.safety.safe_min_calories_female - 1200.0).abs() < f64::EPSILON);
    assert!((config.safety.kcal_per_kg_body_mass - 7700.0).abs() < f64::EPSILON);
    assert!((config.goal_adjustments.deficit_min + 750.0).abs() < f64::EPSILON);
    assert!((config.goal_adjustments.surplus_max - 400.0).abs() < f64::EPSILON);
    assert!((config.macronutrients.protein_lose_weight.midpoint() - 1.9).abs() < 1e-9);
    assert!((config.macronutrients.clamp_fat_fraction(0.5) - 0.35).abs() < f64::EPSILON);
    assert!((config.macronutrients.clamp_fat_fraction(0.1) - 0.2).abs() < f64::EPSILON);
}

#[test]
fn test_inverted_deficit_bounds_rejected() {
    let mut config = NutritionPlanConfig::default();
    config.goal_adjustments.deficit_min = -100.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_positive_deficit_rejected() {
    let mut config = NutritionPlanConfig::default();
    config.goal_adjustments.deficit_max = 100.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_descending_activity_factors_rejected() {
    let mut config = NutritionPlanConfig::default();
    config.activity_factors.moderate = 2.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_inverted_protein_range_rejected() {
    let mut config = NutritionPlanConfig::default();
    config.macronutrients.protein_build_muscle = ProteinRange::from((2.2, 1.6));

    assert!(config.validate().is_err());
}

#[test]
fn test_non_finite_values_rejected() {
    let mut config = NutritionPlanConfig::default();
    config.safety.safe_min_calories_female = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = NutritionPlanConfig::default();
    config.goal_adjustments.surplus_max = f64::INFINITY;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::InvalidRange("surplus_min must be < surplus_max").into();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("surplus_min"));
}

#[test]
fn test_config_serializes_by_section() {
    let value = serde_json::to_value(NutritionPlanConfig::default()).unwrap();

    assert_eq!(value["safety"]["safe_min_calories_female"], 1200.0);
    assert_eq!(value["macronutrients"]["fat_max_fraction"], 0.35);
    assert_eq!(value["activity_factors"]["athlete"], 1.9);

    let back: NutritionPlanConfig = serde_json::from_value(value).unwrap();
    assert_eq!(back, NutritionPlanConfig::default());
}

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();

    let config = NutritionPlanConfig::load().unwrap();
    assert_eq!(config, NutritionPlanConfig::default());
}

#[test]
#[serial]
fn test_safe_minimum_override_changes_plan() {
    clear_overrides();
    env::set_var("NUTRIPLAN_SAFE_MIN_CALORIES_FEMALE", "1400");

    let config = NutritionPlanConfig::load().unwrap();
    clear_overrides();

    assert!((config.safety.safe_min_calories_female - 1400.0).abs() < f64::EPSILON);

    let plan = NutritionPlanCalculator::new(&config).compute(&common::weight_loss_female());
    assert_eq!(plan.target_calories, 1400);
    assert!(plan.has_note("Calories adjusted to safe minimum"));
}

#[test]
#[serial]
fn test_energy_density_override_changes_rate() {
    clear_overrides();
    env::set_var("NUTRIPLAN_KCAL_PER_KG", " 7000 ");

    let config = NutritionPlanConfig::load().unwrap();
    clear_overrides();

    let plan = NutritionPlanCalculator::new(&config).compute(&common::weight_loss_female());
    // -500 * 7 / 7000
    assert!((plan.expected_rate_per_week + 0.5).abs() < 1e-9);
}

#[test]
#[serial]
fn test_unparseable_override_is_parse_error() {
    clear_overrides();
    env::set_var("NUTRIPLAN_SURPLUS_MAX", "lots");

    let result = NutritionPlanConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => assert!(message.contains("NUTRIPLAN_SURPLUS_MAX")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_override_breaking_invariant_is_rejected() {
    clear_overrides();
    env::set_var("NUTRIPLAN_FAT_MIN_FRACTION", "0.5");

    let result = NutritionPlanConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_nan_override_is_rejected() {
    clear_overrides();
    env::set_var("NUTRIPLAN_SAFE_MIN_CALORIES_FEMALE", "NaN");
    env::set_var("NUTRIPLAN_DEFICIT_MIN", "NaN");

    let result = NutritionPlanConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_global_config_is_valid() {
    clear_overrides();

    let config = NutritionPlanConfig::global();
    assert!(config.validate().is_ok());
    assert!(std::ptr::eq(config, NutritionPlanConfig::global()));
}
