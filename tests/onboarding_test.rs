// ABOUTME: Tests for questionnaire answer mapping, step tracking, and unit conversion
// ABOUTME: Verifies answers in cm/ft and kg/lb become the metric profile the calculator expects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::config::NutritionPlanConfig;
use nutriplan::errors::ErrorCode;
use nutriplan::intelligence::NutritionPlanCalculator;
use nutriplan::models::{
    ActivityLevel, ExperienceLevel, FatGainTolerance, GoalTarget, Pace, Sex, WorkoutFrequency,
};
use nutriplan::onboarding::units::{
    height_to_meters, kg_to_weight, meters_to_height, ml_to_volume, volume_to_ml, weight_to_kg,
};
use nutriplan::onboarding::{
    goal_title, map_activity_level, map_goal, HeightUnit, LengthUnit, OnboardingAnswers,
    OnboardingStep, UnitPreferences, VolumeUnit, WeightUnit,
};
use serde_json::json;

mod common;

use common::assert_close;

fn answers(value: serde_json::Value) -> OnboardingAnswers {
    serde_json::from_value(value).unwrap()
}

fn complete_maintenance_answers() -> OnboardingAnswers {
    answers(json!({
        "age": 30,
        "sex": "male",
        "height": 180,
        "heightUnit": "cm",
        "weight": 80,
        "weightUnit": "kg",
        "activityLevel": "moderately-active",
        "goal": "maintain-health",
        "goalOptions": {
            "focus": "general_health",
            "workoutFrequency": "2-3",
            "dietExperience": "intermediate"
        }
    }))
}

// ============================================================================
// UNIT CONVERSION
// ============================================================================

#[test]
fn test_feet_to_meters() {
    assert!((height_to_meters(5.9, HeightUnit::Ft) - 1.798_32).abs() < 1e-9);
    assert!((height_to_meters(180.0, HeightUnit::Cm) - 1.8).abs() < 1e-9);
}

#[test]
fn test_pounds_to_kilograms() {
    assert!((weight_to_kg(176.0, WeightUnit::Lb) - 79.832_192).abs() < 1e-9);
    assert_close(weight_to_kg(80.0, WeightUnit::Kg), 80.0);
}

#[test]
fn test_inverse_conversions() {
    assert!((meters_to_height(1.798_32, HeightUnit::Ft) - 5.9).abs() < 1e-9);
    assert!((meters_to_height(1.8, HeightUnit::Cm) - 180.0).abs() < 1e-9);
    assert!((kg_to_weight(79.832_192, WeightUnit::Lb) - 176.0).abs() < 1e-9);
}

#[test]
fn test_volume_conversion() {
    assert!((volume_to_ml(8.0, VolumeUnit::FlOz) - 236.588).abs() < 1e-9);
    assert_close(volume_to_ml(250.0, VolumeUnit::Ml), 250.0);
    assert!((ml_to_volume(29.5735, VolumeUnit::FlOz) - 1.0).abs() < 1e-9);
}

#[test]
fn test_unit_preferences_defaults_and_wire_names() {
    let defaults = UnitPreferences::default();
    assert_eq!(defaults.weight_unit, WeightUnit::Kg);
    assert_eq!(defaults.length_unit, LengthUnit::M);
    assert_eq!(defaults.volume_unit, VolumeUnit::Ml);
    assert_eq!(defaults.default_height_unit(), HeightUnit::Cm);

    let imperial: UnitPreferences = serde_json::from_value(json!({
        "weightUnit": "lb",
        "lengthUnit": "ft",
        "volumeUnit": "floz"
    }))
    .unwrap();
    assert_eq!(imperial.volume_unit, VolumeUnit::FlOz);
    assert_eq!(imperial.default_height_unit(), HeightUnit::Ft);
    assert_eq!(
        serde_json::to_value(imperial).unwrap()["volumeUnit"],
        json!("fl oz")
    );
}

// ============================================================================
// QUESTIONNAIRE ID MAPPING
// ============================================================================

#[test]
fn test_activity_ids_map_to_calculator_levels() {
    assert_eq!(
        map_activity_level(Some("sedentary")),
        ActivityLevel::Sedentary
    );
    assert_eq!(
        map_activity_level(Some("lightly-active")),
        ActivityLevel::LightlyActive
    );
    assert_eq!(
        map_activity_level(Some("moderately-active")),
        ActivityLevel::Moderate
    );
    assert_eq!(
        map_activity_level(Some("very-active")),
        ActivityLevel::VeryActive
    );
    assert_eq!(
        map_activity_level(Some("extra-active")),
        ActivityLevel::Athlete
    );
}

#[test]
fn test_missing_or_unknown_activity_maps_to_moderate() {
    assert_eq!(map_activity_level(None), ActivityLevel::Moderate);
    assert_eq!(map_activity_level(Some("couch")), ActivityLevel::Moderate);
}

#[test]
fn test_goal_ids_and_titles() {
    assert_eq!(map_goal("lose-weight"), "lose_weight");
    assert_eq!(map_goal("maintain-health"), "maintain_health");
    assert_eq!(map_goal("build-muscle"), "build_muscle");
    assert_eq!(map_goal("tone-up"), "tone-up");

    assert_eq!(goal_title("build-muscle"), "Build Muscle");
    assert_eq!(goal_title("tone-up"), "Fitness Goal");
}

// ============================================================================
// STEP TRACKING
// ============================================================================

#[test]
fn test_step_navigation() {
    assert_eq!(OnboardingStep::ALL.len(), usize::from(OnboardingStep::COUNT));
    assert_eq!(OnboardingStep::AgeAndSex.number(), 1);
    assert_eq!(OnboardingStep::Review.number(), 7);
    assert_eq!(
        OnboardingStep::Goal.next(),
        Some(OnboardingStep::GoalDetails)
    );
    assert_eq!(OnboardingStep::Review.next(), None);
    assert_eq!(OnboardingStep::AgeAndSex.previous(), None);
    assert_eq!(
        OnboardingStep::Lifestyle.previous(),
        Some(OnboardingStep::GoalDetails)
    );

    for pair in OnboardingStep::ALL.windows(2) {
        assert_eq!(pair[0].next(), Some(pair[1]));
        assert_eq!(pair[1].previous(), Some(pair[0]));
    }
}

#[test]
fn test_step_progress_and_display() {
    assert!((OnboardingStep::Review.progress_percent() - 100.0).abs() < 1e-9);
    assert!((OnboardingStep::Goal.progress_percent() - 400.0 / 7.0).abs() < 1e-9);
    assert_eq!(
        OnboardingStep::AgeAndSex.to_string(),
        "Step 1 of 7: Age and Sex"
    );
}

#[test]
fn test_empty_answers_start_at_first_step() {
    let empty = OnboardingAnswers::default();

    assert_eq!(empty.current_step(), OnboardingStep::AgeAndSex);
    assert_eq!(
        empty.missing_for(OnboardingStep::AgeAndSex),
        vec!["age", "sex"]
    );
    assert_eq!(
        empty.missing_for(OnboardingStep::BodyMeasurements),
        vec!["height", "weight"]
    );
    assert!(empty.missing_for(OnboardingStep::Review).is_empty());
}

#[test]
fn test_goal_details_depend_on_goal() {
    let mut partial = answers(json!({
        "age": 28,
        "sex": "female",
        "height": 165,
        "weight": 60,
        "activityLevel": "sedentary",
        "goal": "build-muscle"
    }));

    assert_eq!(partial.current_step(), OnboardingStep::GoalDetails);
    assert_eq!(
        partial.missing_for(OnboardingStep::GoalDetails),
        vec![
            "trainingExperience",
            "strengthTrainingDays",
            "fatGainTolerance"
        ]
    );

    partial.goal = Some("lose-weight".to_owned());
    assert_eq!(
        partial.missing_for(OnboardingStep::GoalDetails),
        vec!["pace"]
    );
}

#[test]
fn test_blank_strings_count_as_missing() {
    let blank = answers(json!({ "activityLevel": "  ", "goal": "" }));

    assert_eq!(
        blank.missing_for(OnboardingStep::ActivityLevel),
        vec!["activityLevel"]
    );
    assert_eq!(blank.missing_for(OnboardingStep::Goal), vec!["goal"]);
}

#[test]
fn test_complete_answers_reach_review() {
    let complete = complete_maintenance_answers();

    assert_eq!(complete.current_step(), OnboardingStep::Review);
    for step in OnboardingStep::ALL {
        assert!(complete.missing_for(step).is_empty(), "{step} incomplete");
    }
}

// ============================================================================
// PROFILE MAPPING
// ============================================================================

#[test]
fn test_metric_answers_reproduce_reference_plan() {
    let profile = complete_maintenance_answers().into_profile().unwrap();

    assert_eq!(profile.sex, Sex::Male);
    assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    assert!((profile.height_meters - 1.8).abs() < 1e-9);
    assert!(matches!(
        profile.goal.target,
        GoalTarget::MaintainHealth { .. }
    ));

    let config = NutritionPlanConfig::default();
    let plan = NutritionPlanCalculator::new(&config).compute(&profile);
    assert_eq!(plan.bmr, 1780);
    assert_eq!(plan.tdee, 2759);
    assert_eq!(plan.target_calories, 2759);
}

#[test]
fn test_imperial_answers_are_converted() {
    let imperial = answers(json!({
        "age": 30,
        "sex": "male",
        "height": 5.9,
        "weight": 176,
        "activityLevel": "moderately-active",
        "goal": "maintain-health",
        "units": { "weightUnit": "lb", "lengthUnit": "ft" }
    }));

    assert_eq!(imperial.effective_height_unit(), HeightUnit::Ft);
    assert_eq!(imperial.effective_weight_unit(), WeightUnit::Lb);

    let profile = imperial.into_profile().unwrap();
    assert!((profile.height_meters - 1.798_32).abs() < 1e-9);
    assert!((profile.weight_kg - 79.832_192).abs() < 1e-9);

    let config = NutritionPlanConfig::default();
    let plan = NutritionPlanCalculator::new(&config).compute(&profile);
    // 798.32192 + 1123.95 - 150 + 5
    assert_eq!(plan.bmr, 1777);
    assert_eq!(plan.tdee, 2755);
}

#[test]
fn test_explicit_height_unit_overrides_preference() {
    let mixed = answers(json!({
        "age": 40,
        "sex": "female",
        "height": 170,
        "heightUnit": "cm",
        "weight": 150,
        "units": { "weightUnit": "lb", "lengthUnit": "ft" }
    }));

    let profile = mixed.into_profile().unwrap();
    assert!((profile.height_meters - 1.7).abs() < 1e-9);
    assert!((profile.weight_kg - 68.0388).abs() < 1e-9);
}

#[test]
fn test_goal_options_flow_into_selection() {
    let bulking = answers(json!({
        "age": 22,
        "sex": "male",
        "height": 178,
        "weight": 72,
        "activityLevel": "very-active",
        "goal": "build-muscle",
        "goalOptions": {
            "trainingExperience": "beginner",
            "strengthTrainingDays": "3-4",
            "fatGainTolerance": "minimal",
            "workoutFrequency": "4-6",
            "dietExperience": "beginner"
        }
    }));

    let profile = bulking.into_profile().unwrap();
    assert_eq!(
        profile.goal.target,
        GoalTarget::BuildMuscle {
            training_experience: ExperienceLevel::Beginner,
            fat_gain_tolerance: FatGainTolerance::Minimal,
        }
    );
    assert_eq!(profile.goal.workout_frequency, WorkoutFrequency::FourToSix);
    assert_eq!(profile.goal.diet_experience, ExperienceLevel::Beginner);
    assert_eq!(
        bulking.goal_options.strength_training_days.as_deref(),
        Some("3-4")
    );
}

#[test]
fn test_unknown_option_values_fall_back() {
    let odd = answers(json!({
        "age": 35,
        "sex": "female",
        "height": 160,
        "weight": 70,
        "goal": "lose-weight",
        "goalOptions": { "pace": "turbo", "workoutFrequency": "7" }
    }));

    let profile = odd.into_profile().unwrap();
    assert_eq!(
        profile.goal.target,
        GoalTarget::LoseWeight {
            pace: Pace::Unspecified
        }
    );
    assert_eq!(profile.goal.workout_frequency, WorkoutFrequency::Unspecified);
}

#[test]
fn test_sex_ids_are_case_sensitive() {
    let parse = |id: &str| serde_json::from_value::<Sex>(json!(id)).unwrap();

    assert_eq!(parse("male"), Sex::Male);
    assert_eq!(parse("female"), Sex::Female);
    // Only the exact lowercase id selects the male equation
    assert_eq!(parse("Male"), Sex::Female);
    assert_eq!(parse("other"), Sex::Female);
    assert_eq!(Sex::Male.as_str(), "male");
}

#[test]
fn test_unknown_goal_id_passes_through() {
    let mut custom = complete_maintenance_answers();
    custom.goal = Some("tone-up".to_owned());

    let profile = custom.into_profile().unwrap();
    assert_eq!(
        profile.goal.target,
        GoalTarget::Unrecognized {
            goal: "tone-up".to_owned()
        }
    );
}

#[test]
fn test_missing_biometrics_are_reported() {
    let mut no_age = complete_maintenance_answers();
    no_age.age = None;
    let error = no_age.into_profile().unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.field.as_deref(), Some("age"));

    let mut no_weight = complete_maintenance_answers();
    no_weight.weight = None;
    let error = no_weight.into_profile().unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.field.as_deref(), Some("weight"));
}

#[test]
fn test_non_positive_measurements_are_rejected() {
    let mut zero_height = complete_maintenance_answers();
    zero_height.height = Some(0.0);
    let error = zero_height.into_profile().unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.field.as_deref(), Some("height"));

    let mut negative_weight = complete_maintenance_answers();
    negative_weight.weight = Some(-5.0);
    let error = negative_weight.into_profile().unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_implausible_profile_fails_validation() {
    let mut child = complete_maintenance_answers();
    child.age = Some(5);
    let error = child.into_profile().unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.field.as_deref(), Some("age"));

    // 180 ft is not a height
    let mut wrong_unit = complete_maintenance_answers();
    wrong_unit.height_unit = Some(HeightUnit::Ft);
    let error = wrong_unit.into_profile().unwrap_err();
    assert_eq!(error.field.as_deref(), Some("heightMeters"));
}
