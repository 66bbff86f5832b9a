// ABOUTME: Onboarding command for the nutriplan CLI
// ABOUTME: Checks questionnaire completeness, maps answers to a profile, and formats the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::config::NutritionPlanConfig;
use nutriplan::errors::{AppError, AppResult, ErrorCode};
use nutriplan::formatters::{
    format_output, format_output_pretty, FormattedOutput, OutputFormat, PlanSummary,
};
use nutriplan::input::load_answers;
use nutriplan::intelligence::NutritionPlanCalculator;
use nutriplan::models::{NutritionPlan, ProfileInput};
use nutriplan::onboarding::{goal_title, OnboardingStep};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OnboardingReport<'a> {
    goal_title: &'static str,
    profile: &'a ProfileInput,
    plan: &'a NutritionPlan,
}

/// Map the answers at `source` and compute their plan
pub fn run(
    config: &NutritionPlanConfig,
    source: &str,
    format: OutputFormat,
    pretty: bool,
) -> AppResult<FormattedOutput> {
    let answers = load_answers(source)?;

    let step = answers.current_step();
    if step != OnboardingStep::Review {
        let missing = answers.missing_for(step);
        let field = missing.first().copied().unwrap_or_default();
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            format!("{step} still needs: {}", missing.join(", ")),
        )
        .with_field(field));
    }

    let profile = answers.into_profile()?;
    let plan = NutritionPlanCalculator::new(config).compute(&profile);
    let title = goal_title(answers.goal.as_deref().unwrap_or_default());
    info!("Onboarding complete for '{title}': {} kcal/day", plan.target_calories);

    let output = match format {
        OutputFormat::Text => {
            let summary = PlanSummary::from_plan(&plan, profile.weight_kg);
            FormattedOutput {
                data: format!("Goal: {title}\n\n{summary}"),
                format,
                content_type: format.content_type(),
            }
        }
        OutputFormat::Json => {
            let report = OnboardingReport {
                goal_title: title,
                profile: &profile,
                plan: &plan,
            };
            if pretty {
                format_output_pretty(&report, format)?
            } else {
                format_output(&report, format)?
            }
        }
    };
    Ok(output)
}
