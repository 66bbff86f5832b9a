// ABOUTME: Intelligence module hosting the nutrition plan calculator
// ABOUTME: Re-exports the calculator and its stage functions for callers and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Turns a validated profile into daily calorie and macronutrient targets.

/// Staged nutrition plan calculation
pub mod nutrition_planner;

pub use nutrition_planner::{
    calculate_bmr, calculate_tdee, clamp_to_safe_minimum, compute_nutrition_plan,
    expected_rate_per_week, plan_goal_adjustment, round_half_up, split_macros, GoalAdjustment,
    MacroSplit, NutritionPlanCalculator,
};
