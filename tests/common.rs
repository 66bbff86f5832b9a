// ABOUTME: Shared test utilities and profile builders for integration tests
// ABOUTME: Provides quiet tracing setup and the reference profiles used across suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `nutriplan`

use nutriplan::models::{
    ActivityLevel, ExperienceLevel, FatGainTolerance, GoalSelection, GoalTarget, Pace,
    ProfileInput, Sex, WorkoutFrequency,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Profile with the given biometrics and goal
pub fn profile(
    sex: Sex,
    age: u32,
    height_meters: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: GoalSelection,
) -> ProfileInput {
    ProfileInput {
        age,
        sex,
        height_meters,
        weight_kg,
        activity_level,
        goal,
    }
}

/// Male, 30 y, 1.80 m, 80 kg, moderate activity, general health maintenance
pub fn maintenance_male() -> ProfileInput {
    profile(
        Sex::Male,
        30,
        1.80,
        80.0,
        ActivityLevel::Moderate,
        GoalSelection::new(GoalTarget::MaintainHealth {
            focus: Some("general_health".to_owned()),
        }),
    )
}

/// Female, 25 y, 1.65 m, 60 kg, sedentary, moderate weight loss
pub fn weight_loss_female() -> ProfileInput {
    profile(
        Sex::Female,
        25,
        1.65,
        60.0,
        ActivityLevel::Sedentary,
        GoalSelection::new(GoalTarget::LoseWeight {
            pace: Pace::Moderate,
        })
        .with_diet_experience(ExperienceLevel::Intermediate)
        .with_workout_frequency(WorkoutFrequency::TwoToThree),
    )
}

/// Weight-loss goal with explicit pace and scaling options
pub fn lose_weight(
    pace: Pace,
    diet_experience: ExperienceLevel,
    workout_frequency: WorkoutFrequency,
) -> GoalSelection {
    GoalSelection::new(GoalTarget::LoseWeight { pace })
        .with_diet_experience(diet_experience)
        .with_workout_frequency(workout_frequency)
}

/// Muscle-gain goal with explicit options
pub fn build_muscle(
    training_experience: ExperienceLevel,
    fat_gain_tolerance: FatGainTolerance,
    diet_experience: ExperienceLevel,
    workout_frequency: WorkoutFrequency,
) -> GoalSelection {
    GoalSelection::new(GoalTarget::BuildMuscle {
        training_experience,
        fat_gain_tolerance,
    })
    .with_diet_experience(diet_experience)
    .with_workout_frequency(workout_frequency)
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
