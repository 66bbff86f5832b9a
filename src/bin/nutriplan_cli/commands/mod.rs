// ABOUTME: Re-exports command modules for the nutriplan CLI
// ABOUTME: Provides plan computation, onboarding mapping, and config output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod compute;
pub mod onboard;

use nutriplan::config::NutritionPlanConfig;
use nutriplan::errors::AppResult;
use nutriplan::formatters::{format_output, format_output_pretty, FormattedOutput, OutputFormat};

/// Render the effective configuration; JSON is always pretty-printed
pub fn show_config(
    config: &NutritionPlanConfig,
    format: OutputFormat,
) -> AppResult<FormattedOutput> {
    let output = match format {
        OutputFormat::Json => format_output_pretty(config, format)?,
        OutputFormat::Text => format_output(config, format)?,
    };
    Ok(output)
}
