// ABOUTME: Main library entry point for the nutriplan nutrition planner
// ABOUTME: Configuration, calculator, onboarding mapping, formatting, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Turns onboarding questionnaire answers into a daily calorie target and a
//! protein / carbohydrate / fat split.
//!
//! ## Architecture
//!
//! - **Models**: profile and plan records from `nutriplan-core`
//! - **Config**: tunable tables with `NUTRIPLAN_*` environment overrides
//! - **Intelligence**: the staged nutrition plan calculator
//! - **Onboarding**: questionnaire ids, steps, and unit conversion
//! - **Formatters**: JSON and text output
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::intelligence::NutritionPlanCalculator;
//! use nutriplan::config::NutritionPlanConfig;
//! use nutriplan::input::load_profile;
//! use nutriplan::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = NutritionPlanConfig::load()?;
//!     let profile = load_profile("profile.json")?;
//!     let plan = NutritionPlanCalculator::new(&config).compute(&profile);
//!     println!("Target: {} kcal/day", plan.target_calories);
//!     Ok(())
//! }
//! ```

// Foundation types live in nutriplan-core; re-exported so callers keep one import root
pub use nutriplan_core::{constants, errors, models};

/// Nutrition plan configuration and environment overrides
pub mod config;

/// JSON and text output for plans and profiles
pub mod formatters;

/// Reading profile and answer documents
pub mod input;

/// Nutrition plan calculator
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Onboarding questionnaire mapping and units
pub mod onboarding;
