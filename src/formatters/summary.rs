// ABOUTME: Human-readable plan summary with the rounding used on the review screen
// ABOUTME: Signed adjustment and weekly rate, one-decimal percentages, protein per kg
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::round_half_up;
use nutriplan_core::models::{MacroTarget, NutritionPlan};
use serde::Serialize;
use std::fmt;

/// One macro line of the summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSummary {
    /// Grams per day
    pub grams: i64,
    /// kcal per day
    pub calories: i64,
    /// Share of target calories, one decimal
    pub percentage: f64,
}

impl From<&MacroTarget> for MacroSummary {
    fn from(target: &MacroTarget) -> Self {
        Self {
            grams: target.grams,
            calories: target.calories,
            percentage: round_to_tenth(target.percentage),
        }
    }
}

/// Display values for a computed plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// kcal/day
    pub bmr: i64,
    /// kcal/day
    pub tdee: i64,
    /// Adjustment rounded to whole kcal with explicit sign, e.g. `+250 cal`
    pub adjustment: String,
    /// kcal/day
    pub target_calories: i64,
    /// Signed weekly change, e.g. `-0.45 kg/week`; absent at maintenance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_change: Option<String>,
    /// Protein line
    pub protein: MacroSummary,
    /// Carbohydrate line
    pub carbs: MacroSummary,
    /// Fat line
    pub fats: MacroSummary,
    /// Protein grams per kg of body weight, one decimal
    pub protein_per_kg: f64,
    /// Plan notes, unchanged
    pub notes: Vec<String>,
}

impl PlanSummary {
    /// Build the summary for a plan computed at `weight_kg`
    #[must_use]
    pub fn from_plan(plan: &NutritionPlan, weight_kg: f64) -> Self {
        let sign = if plan.calorie_adjustment > 0.0 { "+" } else { "" };
        let weekly_change = (plan.expected_rate_per_week != 0.0)
            .then(|| format!("{:+.2} kg/week", plan.expected_rate_per_week));
        let protein_per_kg = if weight_kg > 0.0 {
            round_to_tenth(plan.macros.protein.grams as f64 / weight_kg)
        } else {
            0.0
        };

        Self {
            bmr: plan.bmr,
            tdee: plan.tdee,
            adjustment: format!("{sign}{} cal", round_half_up(plan.calorie_adjustment)),
            target_calories: plan.target_calories,
            weekly_change,
            protein: (&plan.macros.protein).into(),
            carbs: (&plan.macros.carbs).into(),
            fats: (&plan.macros.fats).into(),
            protein_per_kg,
            notes: plan.notes.clone(),
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BMR:             {} cal", self.bmr)?;
        writeln!(f, "TDEE:            {} cal", self.tdee)?;
        writeln!(f, "Adjustment:      {}", self.adjustment)?;
        writeln!(f, "Target calories: {} cal", self.target_calories)?;
        if let Some(change) = &self.weekly_change {
            writeln!(f, "Expected change: {change}")?;
        }
        writeln!(f)?;
        write_macro(f, "Protein", &self.protein)?;
        writeln!(f, "  ~{:.1} g/kg body weight", self.protein_per_kg)?;
        write_macro(f, "Carbs", &self.carbs)?;
        write_macro(f, "Fats", &self.fats)?;
        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Notes:")?;
            for note in &self.notes {
                writeln!(f, "  - {note}")?;
            }
        }
        Ok(())
    }
}

fn write_macro(f: &mut fmt::Formatter<'_>, name: &str, line: &MacroSummary) -> fmt::Result {
    writeln!(
        f,
        "{name:<8} {:>4}g  {:>5} cal  {}%",
        line.grams, line.calories, line.percentage
    )
}
