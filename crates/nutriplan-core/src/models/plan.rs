// ABOUTME: Nutrition plan output model produced by the calculator
// ABOUTME: Calorie targets, per-macro grams/calories/percentages, expected weekly change, notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::macros::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use serde::{Deserialize, Serialize};

/// One macronutrient target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTarget {
    /// Grams per day
    pub grams: i64,
    /// kcal per day
    pub calories: i64,
    /// Share of target calories, 0-100, unrounded
    pub percentage: f64,
}

/// Protein, carbohydrate and fat targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Protein target
    pub protein: MacroTarget,
    /// Carbohydrate target
    pub carbs: MacroTarget,
    /// Fat target
    pub fats: MacroTarget,
}

impl MacroBreakdown {
    /// kcal implied by the gram amounts (4/4/9 kcal per gram)
    #[must_use]
    pub fn calories_from_grams(&self) -> f64 {
        (self.protein.grams as f64).mul_add(
            KCAL_PER_G_PROTEIN,
            (self.carbs.grams as f64)
                .mul_add(KCAL_PER_G_CARBS, self.fats.grams as f64 * KCAL_PER_G_FAT),
        )
    }

    /// Sum of the per-macro calorie figures
    #[must_use]
    pub const fn total_calories(&self) -> i64 {
        self.protein.calories + self.carbs.calories + self.fats.calories
    }
}

/// Daily nutrition plan derived from a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    /// Basal Metabolic Rate, kcal/day
    pub bmr: i64,
    /// Total Daily Energy Expenditure, kcal/day
    pub tdee: i64,
    /// Daily calorie target, never below the safe minimum
    pub target_calories: i64,
    /// Delta applied to TDEE, kcal/day (negative deficit, positive surplus)
    pub calorie_adjustment: f64,
    /// Macronutrient split
    pub macros: MacroBreakdown,
    /// Estimated body mass change, kg/week, two decimals
    #[serde(alias = "expectedKgPerWeek")]
    pub expected_rate_per_week: f64,
    /// Advisory notes describing which rules fired, in order
    pub notes: Vec<String>,
}

impl NutritionPlan {
    /// Whether a note with exactly this text was recorded
    #[must_use]
    pub fn has_note(&self, note: &str) -> bool {
        self.notes.iter().any(|n| n == note)
    }
}
