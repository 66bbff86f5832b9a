// ABOUTME: Nutriplan CLI - computes nutrition plans from profile or questionnaire JSON
// ABOUTME: Handles plan computation, onboarding answer mapping, and config inspection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compute a plan from a metric profile record
//! nutriplan compute --profile profile.json
//!
//! # Same, reading stdin and printing the review summary
//! cat profile.json | nutriplan --format text compute --profile -
//!
//! # Map questionnaire answers (cm/ft, kg/lb) and compute the plan
//! nutriplan --pretty onboard --answers answers.json
//!
//! # Show the effective configuration after NUTRIPLAN_* overrides
//! nutriplan config
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutriplan::config::NutritionPlanConfig;
use nutriplan::formatters::OutputFormat;
use nutriplan::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutriplan",
    about = "Nutrition plan calculator",
    long_about = "Computes daily calorie and macronutrient targets from onboarding data."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (json or text)
    #[arg(long, global = true, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a plan from a profile record
    Compute {
        /// Profile JSON file, or `-` for stdin
        #[arg(long)]
        profile: String,
    },

    /// Map questionnaire answers to a profile and compute its plan
    Onboard {
        /// Answers JSON file, or `-` for stdin
        #[arg(long)]
        answers: String,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let config = NutritionPlanConfig::load()?;
    debug!("Nutrition plan configuration loaded");

    let output = match cli.command {
        Command::Compute { profile } => {
            commands::compute::run(&config, &profile, cli.format, cli.pretty)?
        }
        Command::Onboard { answers } => {
            commands::onboard::run(&config, &answers, cli.format, cli.pretty)?
        }
        Command::Config => commands::show_config(&config, cli.format)?,
    };

    println!("{}", output.data.trim_end());
    Ok(())
}
