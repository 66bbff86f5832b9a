// ABOUTME: Plan computation command for the nutriplan CLI
// ABOUTME: Loads a profile record, validates it, and formats the computed plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::config::NutritionPlanConfig;
use nutriplan::errors::AppResult;
use nutriplan::formatters::{format_plan, FormattedOutput, OutputFormat};
use nutriplan::input::load_profile;
use nutriplan::intelligence::NutritionPlanCalculator;
use tracing::info;

/// Compute the plan for the profile at `source`
pub fn run(
    config: &NutritionPlanConfig,
    source: &str,
    format: OutputFormat,
    pretty: bool,
) -> AppResult<FormattedOutput> {
    let profile = load_profile(source)?;
    let plan = NutritionPlanCalculator::new(config).compute(&profile);
    info!(
        "Computed plan for goal '{}': {} kcal/day",
        profile.goal.target.id(),
        plan.target_calories
    );

    Ok(format_plan(&plan, profile.weight_kg, format, pretty)?)
}
