// ABOUTME: Core data models for the nutrition planner
// ABOUTME: Re-exports profile input and nutrition plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Profile input, goal selection, and the onboarding wire record
pub mod profile;
/// Nutrition plan output
pub mod plan;

pub use plan::{MacroBreakdown, MacroTarget, NutritionPlan};
pub use profile::{
    ActivityLevel, ExperienceLevel, FatGainTolerance, GoalOptionsRecord, GoalSelection,
    GoalTarget, Pace, ProfileInput, ProfileRecord, Sex, WorkoutFrequency,
};
