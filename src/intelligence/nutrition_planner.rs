// ABOUTME: Nutrition plan calculator turning an onboarding profile into daily targets
// ABOUTME: BMR, TDEE, goal adjustment, safe-floor clamp, macro split, and expected weekly change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Plan Calculator
//!
//! Single-pass pipeline from a [`ProfileInput`] to a [`NutritionPlan`]:
//!
//! 1. BMR via Mifflin-St Jeor
//! 2. TDEE from the activity multiplier
//! 3. Goal adjustment scaled by diet experience and workout frequency
//! 4. Target calories raised to the sex-specific safe minimum
//! 5. Protein, fat and carbohydrate split
//! 6. Expected weekly body mass change
//!
//! Every rounding step rounds halves up (`floor(x + 0.5)`), so `-367.5`
//! becomes `-367` rather than `-368`.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Helms, E.R., et al. (2014). Evidence-based recommendations for natural bodybuilding
//!   contest preparation: nutrition and supplementation.
//!   *Journal of the International Society of Sports Nutrition*, 11, 20.
//!   <https://doi.org/10.1186/1550-2783-11-20>

use crate::config::{
    ActivityFactorsConfig, AdjustmentKind, BmrConfig, MacronutrientConfig, NutritionPlanConfig,
};
use nutriplan_core::constants::nutrition::{
    bmr::CM_PER_METER, safety::DAYS_PER_WEEK, DEFAULT_DIET_EXPERIENCE_LABEL,
    DEFAULT_WORKOUT_FREQUENCY_LABEL,
};
use nutriplan_core::models::{
    ActivityLevel, ExperienceLevel, FatGainTolerance, GoalSelection, GoalTarget, MacroBreakdown,
    MacroTarget, NutritionPlan, ProfileInput, Sex, WorkoutFrequency,
};
use tracing::{debug, warn};

/// Round to the nearest integer, halves toward positive infinity
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// Returned unrounded; the plan reports it rounded.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn calculate_bmr(profile: &ProfileInput, config: &BmrConfig) -> f64 {
    let height_cm = profile.height_meters * CM_PER_METER;

    config.msj_weight_coef * profile.weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(profile.age)
        + config.constant_for(profile.sex)
}

/// Calculate Total Daily Energy Expenditure, rounded to whole kcal
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    round_half_up(bmr * config.factor_for(activity_level))
}

/// Outcome of the goal stage
#[derive(Debug, Clone, PartialEq)]
pub struct GoalAdjustment {
    /// kcal/day added to TDEE, unrounded
    pub calorie_adjustment: f64,
    /// Protein target in g/kg, `None` when the goal sets none
    pub protein_per_kg: Option<f64>,
    /// Fat share of target calories before clamping
    pub fat_fraction: f64,
    /// Notes produced by the goal rules
    pub notes: Vec<String>,
}

/// Work out the calorie adjustment, protein target and fat share for a goal
#[must_use]
pub fn plan_goal_adjustment(goal: &GoalSelection, config: &NutritionPlanConfig) -> GoalAdjustment {
    let goals = &config.goal_adjustments;
    let macros = &config.macronutrients;
    let mut notes = Vec::new();

    let calorie_adjustment = match &goal.target {
        GoalTarget::LoseWeight { pace } => {
            let scaled = config.scaling.scale(
                goals.base_deficit(*pace),
                AdjustmentKind::Deficit,
                goal.diet_experience,
                goal.workout_frequency,
            );
            notes.push("Fat loss focused calorie deficit".to_owned());
            notes.push(scaling_note("Deficit", goal));
            scaled.max(goals.deficit_min).min(goals.deficit_max)
        }
        GoalTarget::MaintainHealth { .. } => {
            notes.push("Calories set to maintenance level".to_owned());
            let focus = goal.target.focus_or_default().unwrap_or_default();
            notes.push(format!("Focus: {}", focus.replacen('_', " ", 1)));
            0.0
        }
        GoalTarget::BuildMuscle {
            training_experience,
            fat_gain_tolerance,
        } => {
            let mut scaled = config.scaling.scale(
                goals.base_surplus(*training_experience),
                AdjustmentKind::Surplus,
                goal.diet_experience,
                goal.workout_frequency,
            );
            if *fat_gain_tolerance == FatGainTolerance::Minimal {
                scaled -= goals.minimal_fat_gain_reduction;
                notes.push("Minimal fat gain preference — surplus reduced".to_owned());
            }
            notes.push("Lean muscle gain focused calorie surplus".to_owned());
            notes.push(scaling_note("Surplus", goal));
            scaled.min(goals.surplus_max).max(goals.surplus_min)
        }
        GoalTarget::Unrecognized { goal: id } => {
            warn!("Unrecognized goal '{id}', keeping maintenance calories");
            0.0
        }
    };

    GoalAdjustment {
        calorie_adjustment,
        protein_per_kg: macros
            .protein_range_for(&goal.target)
            .map(|range| range.midpoint()),
        fat_fraction: macros.fat_fraction_for(&goal.target),
        notes,
    }
}

fn scaling_note(kind: &str, goal: &GoalSelection) -> String {
    let experience = match goal.diet_experience {
        ExperienceLevel::Unspecified => DEFAULT_DIET_EXPERIENCE_LABEL,
        other => other.as_str(),
    };
    let frequency = match goal.workout_frequency {
        WorkoutFrequency::Unspecified => DEFAULT_WORKOUT_FREQUENCY_LABEL,
        other => other.as_str(),
    };
    format!(
        "{kind} scaled for experience ({experience}) and workout frequency ({frequency} days/week)"
    )
}

/// Target calories with the safe floor applied
///
/// Returns the target and whether the floor was hit.
#[must_use]
pub fn clamp_to_safe_minimum(
    tdee: f64,
    calorie_adjustment: f64,
    safe_minimum: f64,
) -> (f64, bool) {
    let target = round_half_up(tdee + calorie_adjustment);
    if target < safe_minimum {
        (round_half_up(safe_minimum), true)
    } else {
        (target, false)
    }
}

/// Macro split plus whether fat was squeezed
#[derive(Debug, Clone, PartialEq)]
pub struct MacroSplit {
    /// Per-macro targets
    pub macros: MacroBreakdown,
    /// Fat had to be squeezed to make room for protein
    pub fat_adjusted: bool,
}

/// Split target calories into protein, fat and carbohydrate
///
/// Protein is fixed by body weight. Fat takes its clamped share of the
/// target and carbohydrate gets what is left. When protein plus fat already
/// exceed the target, fat drops to the larger of the minimum share and
/// `target - protein - ceiling x target`, and carbohydrate bottoms out at zero.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn split_macros(
    target_calories: f64,
    weight_kg: f64,
    protein_per_kg: f64,
    fat_fraction: f64,
    config: &MacronutrientConfig,
) -> MacroSplit {
    let protein_grams = round_half_up(protein_per_kg * weight_kg);
    let protein_calories = protein_grams * config.kcal_per_g_protein;

    let fat_fraction = config.clamp_fat_fraction(fat_fraction);
    let mut fat_calories = target_calories * fat_fraction;
    let remaining = target_calories - protein_calories - fat_calories;

    let fat_adjusted = remaining < 0.0;
    let carb_calories = if fat_adjusted {
        fat_calories = (target_calories * config.fat_min_fraction).max(
            target_calories
                - protein_calories
                - config.protein_fat_ceiling_fraction * target_calories,
        );
        (target_calories - protein_calories - fat_calories).max(0.0)
    } else {
        remaining
    };

    let fat_grams = round_half_up(fat_calories / config.kcal_per_g_fat);
    let carb_grams = round_half_up(carb_calories / config.kcal_per_g_carbs);

    let target = |grams: f64, calories: f64| MacroTarget {
        grams: grams as i64,
        calories: round_half_up(calories) as i64,
        percentage: calories / target_calories * 100.0,
    };

    MacroSplit {
        macros: MacroBreakdown {
            protein: target(protein_grams, protein_calories),
            carbs: target(carb_grams, carb_calories),
            fats: target(fat_grams, fat_calories),
        },
        fat_adjusted,
    }
}

/// Expected body mass change in kg/week, two decimals
#[must_use]
pub fn expected_rate_per_week(calorie_adjustment: f64, kcal_per_kg_body_mass: f64) -> f64 {
    let weekly = calorie_adjustment * DAYS_PER_WEEK;
    round_half_up(weekly / kcal_per_kg_body_mass * 100.0) / 100.0
}

/// Nutrition plan calculator bound to one configuration
#[derive(Debug, Clone, Copy)]
pub struct NutritionPlanCalculator<'a> {
    config: &'a NutritionPlanConfig,
}

impl Default for NutritionPlanCalculator<'static> {
    fn default() -> Self {
        Self::new(NutritionPlanConfig::global())
    }
}

impl<'a> NutritionPlanCalculator<'a> {
    /// Create a calculator reading the given tables
    #[must_use]
    pub const fn new(config: &'a NutritionPlanConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &'a NutritionPlanConfig {
        self.config
    }

    /// Compute the daily nutrition plan for a profile
    ///
    /// Never fails: unknown options fall back to their defaults. Callers that
    /// need to reject missing biometrics run [`ProfileInput::validate`] first.
    #[must_use]
    pub fn compute(&self, profile: &ProfileInput) -> NutritionPlan {
        let config = self.config;

        let bmr = calculate_bmr(profile, &config.bmr);
        let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
        debug!(
            "Energy expenditure for {} ({}): bmr={bmr:.1}, tdee={tdee}",
            profile.sex.as_str(),
            profile.activity_level.as_str()
        );

        let GoalAdjustment {
            calorie_adjustment,
            protein_per_kg,
            fat_fraction,
            mut notes,
        } = plan_goal_adjustment(&profile.goal, config);

        let (target_calories, floored) = clamp_to_safe_minimum(
            tdee,
            calorie_adjustment,
            self.safe_minimum(profile.sex),
        );
        if floored {
            notes.push("Calories adjusted to safe minimum".to_owned());
        }
        debug!(
            "Goal {}: adjustment={calorie_adjustment}, target={target_calories}",
            profile.goal.target.id()
        );

        let protein_per_kg = protein_per_kg.unwrap_or_else(|| {
            notes.push("Default protein range applied".to_owned());
            config.macronutrients.protein_maintain.midpoint()
        });

        let split = split_macros(
            target_calories,
            profile.weight_kg,
            protein_per_kg,
            fat_fraction,
            &config.macronutrients,
        );
        if split.fat_adjusted {
            notes.push("Fat intake adjusted to fit calorie and protein targets".to_owned());
        }

        let rate = expected_rate_per_week(calorie_adjustment, config.safety.kcal_per_kg_body_mass);
        if calorie_adjustment != 0.0 {
            notes.push(format!(
                "Approximate change: {rate} kg/week (estimate, actual will vary)"
            ));
        }

        NutritionPlan {
            bmr: round_half_up(bmr) as i64,
            tdee: tdee as i64,
            target_calories: target_calories as i64,
            calorie_adjustment,
            macros: split.macros,
            expected_rate_per_week: rate,
            notes,
        }
    }

    fn safe_minimum(&self, sex: Sex) -> f64 {
        self.config.safety.safe_minimum(sex)
    }
}

/// Compute a plan with the global configuration
#[must_use]
pub fn compute_nutrition_plan(profile: &ProfileInput) -> NutritionPlan {
    NutritionPlanCalculator::default().compute(profile)
}
