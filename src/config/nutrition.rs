// ABOUTME: Nutrition plan configuration for BMR, TDEE, goal adjustments, and macro split
// ABOUTME: Tunable tables with defaults matching the onboarding plan rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Plan Configuration
//!
//! Every table the calculator reads lives here so deployments can tune
//! thresholds without touching the pipeline. Defaults come from
//! `nutriplan_core::constants::nutrition`.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use nutriplan_core::constants::nutrition::{activity, bmr, goals, macros, safety, scaling};
use nutriplan_core::models::{
    ActivityLevel, ExperienceLevel, GoalTarget, Pace, Sex, WorkoutFrequency,
};
use serde::{Deserialize, Serialize};

/// Direction of a calorie adjustment, selects which scaling factor applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Below maintenance
    Deficit,
    /// Above maintenance
    Surplus,
}

/// Nutrition plan configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlanConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Base deficits/surpluses and their clamps
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Experience and frequency scaling factors
    pub scaling: ScalingConfig,
    /// Protein ranges, fat fractions, and energy per gram
    pub macronutrients: MacronutrientConfig,
    /// Calorie floors and energy balance
    pub safety: SafetyConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient, per cm (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant term
    #[must_use]
    pub const fn constant_for(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.msj_male_constant,
            Sex::Female => self.msj_female_constant,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Athlete (hard training 2x/day): 1.9
    pub athlete: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level; unspecified falls back to sedentary
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary | ActivityLevel::Unspecified => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::Athlete => self.athlete,
        }
    }
}

/// Base calorie adjustments per goal option, kcal/day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Slow pace deficit (-250)
    pub deficit_slow: f64,
    /// Moderate pace deficit, also used for unknown paces (-500)
    pub deficit_moderate: f64,
    /// Fast and aggressive pace deficit (-750)
    pub deficit_fast: f64,
    /// Largest deficit after scaling (-750)
    pub deficit_min: f64,
    /// Smallest deficit after scaling (-250)
    pub deficit_max: f64,
    /// Beginner lifter surplus (300)
    pub surplus_beginner: f64,
    /// Intermediate lifter surplus, also used for unknown experience (250)
    pub surplus_intermediate: f64,
    /// Advanced lifter surplus (200)
    pub surplus_advanced: f64,
    /// Smallest surplus after scaling (150)
    pub surplus_min: f64,
    /// Largest surplus after scaling (400)
    pub surplus_max: f64,
    /// Surplus removed for minimal fat-gain tolerance (50)
    pub minimal_fat_gain_reduction: f64,
}

impl GoalAdjustmentConfig {
    /// Unscaled deficit for a pace
    #[must_use]
    pub const fn base_deficit(&self, pace: Pace) -> f64 {
        match pace {
            Pace::Slow => self.deficit_slow,
            Pace::Moderate | Pace::Unspecified => self.deficit_moderate,
            Pace::Fast | Pace::Aggressive => self.deficit_fast,
        }
    }

    /// Unscaled surplus for a training experience
    #[must_use]
    pub const fn base_surplus(&self, experience: ExperienceLevel) -> f64 {
        match experience {
            ExperienceLevel::Beginner => self.surplus_beginner,
            ExperienceLevel::Intermediate | ExperienceLevel::Unspecified => {
                self.surplus_intermediate
            }
            ExperienceLevel::Advanced => self.surplus_advanced,
        }
    }
}

/// Scaling of deficits and surpluses by diet experience and workout frequency
///
/// Beginners and infrequent trainers get gentler adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingConfig {
    /// Beginner dieter, deficit (0.7)
    pub beginner_deficit: f64,
    /// Beginner dieter, surplus (0.8)
    pub beginner_surplus: f64,
    /// Advanced dieter, deficit (1.1)
    pub advanced_deficit: f64,
    /// Advanced dieter, surplus (1.1)
    pub advanced_surplus: f64,
    /// 0-1 workouts/week, deficit (0.7)
    pub low_frequency_deficit: f64,
    /// 0-1 workouts/week, surplus (0.7)
    pub low_frequency_surplus: f64,
    /// 4-6 workouts/week, deficit (1.0)
    pub high_frequency_deficit: f64,
    /// 4-6 workouts/week, surplus (1.1)
    pub high_frequency_surplus: f64,
}

impl ScalingConfig {
    /// Factor for diet experience; intermediate and unspecified are neutral
    #[must_use]
    pub const fn experience_factor(
        &self,
        experience: ExperienceLevel,
        kind: AdjustmentKind,
    ) -> f64 {
        match (experience, kind) {
            (ExperienceLevel::Beginner, AdjustmentKind::Deficit) => self.beginner_deficit,
            (ExperienceLevel::Beginner, AdjustmentKind::Surplus) => self.beginner_surplus,
            (ExperienceLevel::Advanced, AdjustmentKind::Deficit) => self.advanced_deficit,
            (ExperienceLevel::Advanced, AdjustmentKind::Surplus) => self.advanced_surplus,
            (ExperienceLevel::Intermediate | ExperienceLevel::Unspecified, _) => scaling::NEUTRAL,
        }
    }

    /// Factor for workout frequency; 2-3 days and unspecified are neutral
    #[must_use]
    pub const fn frequency_factor(&self, frequency: WorkoutFrequency, kind: AdjustmentKind) -> f64 {
        match (frequency, kind) {
            (WorkoutFrequency::ZeroToOne, AdjustmentKind::Deficit) => self.low_frequency_deficit,
            (WorkoutFrequency::ZeroToOne, AdjustmentKind::Surplus) => self.low_frequency_surplus,
            (WorkoutFrequency::FourToSix, AdjustmentKind::Deficit) => self.high_frequency_deficit,
            (WorkoutFrequency::FourToSix, AdjustmentKind::Surplus) => self.high_frequency_surplus,
            (WorkoutFrequency::TwoToThree | WorkoutFrequency::Unspecified, _) => scaling::NEUTRAL,
        }
    }

    /// `base` scaled by both factors
    #[must_use]
    pub fn scale(
        &self,
        base: f64,
        kind: AdjustmentKind,
        experience: ExperienceLevel,
        frequency: WorkoutFrequency,
    ) -> f64 {
        base * self.experience_factor(experience, kind) * self.frequency_factor(frequency, kind)
    }
}

/// Protein target range in g/kg body weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProteinRange {
    /// Lower bound (g/kg)
    pub min_g_per_kg: f64,
    /// Upper bound (g/kg)
    pub max_g_per_kg: f64,
}

impl ProteinRange {
    /// Range midpoint, the value the plan uses
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min_g_per_kg + self.max_g_per_kg) / 2.0
    }
}

impl From<(f64, f64)> for ProteinRange {
    fn from((min_g_per_kg, max_g_per_kg): (f64, f64)) -> Self {
        Self {
            min_g_per_kg,
            max_g_per_kg,
        }
    }
}

/// Macronutrient split configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein range for weight loss (1.6-2.2 g/kg)
    pub protein_lose_weight: ProteinRange,
    /// Protein range for maintenance and the fallback (1.2-1.6 g/kg)
    pub protein_maintain: ProteinRange,
    /// Protein range for muscle gain (1.6-2.0 g/kg)
    pub protein_build_muscle: ProteinRange,
    /// Fat share for weight loss (0.25)
    pub fat_fraction_lose_weight: f64,
    /// Fat share for maintenance (0.30)
    pub fat_fraction_maintain: f64,
    /// Fat share for muscle gain (0.25)
    pub fat_fraction_build_muscle: f64,
    /// Fat share when the goal is unrecognized (0.25)
    pub fat_fraction_default: f64,
    /// Lowest fat share of target calories (0.20)
    pub fat_min_fraction: f64,
    /// Highest fat share of target calories (0.35)
    pub fat_max_fraction: f64,
    /// Protein plus fat ceiling used when fat has to be squeezed (0.4)
    pub protein_fat_ceiling_fraction: f64,
    /// kcal per gram of protein (4)
    pub kcal_per_g_protein: f64,
    /// kcal per gram of carbohydrate (4)
    pub kcal_per_g_carbs: f64,
    /// kcal per gram of fat (9)
    pub kcal_per_g_fat: f64,
}

impl MacronutrientConfig {
    /// Raise a fat fraction to the lower bound, then cap it at the upper bound
    #[must_use]
    pub fn clamp_fat_fraction(&self, fraction: f64) -> f64 {
        fraction.max(self.fat_min_fraction).min(self.fat_max_fraction)
    }

    /// Protein range for a goal, `None` when the goal carries no protein target
    #[must_use]
    pub const fn protein_range_for(&self, goal: &GoalTarget) -> Option<ProteinRange> {
        match goal {
            GoalTarget::LoseWeight { .. } => Some(self.protein_lose_weight),
            GoalTarget::MaintainHealth { .. } => Some(self.protein_maintain),
            GoalTarget::BuildMuscle { .. } => Some(self.protein_build_muscle),
            GoalTarget::Unrecognized { .. } => None,
        }
    }

    /// Starting fat share for a goal, before clamping
    #[must_use]
    pub const fn fat_fraction_for(&self, goal: &GoalTarget) -> f64 {
        match goal {
            GoalTarget::LoseWeight { .. } => self.fat_fraction_lose_weight,
            GoalTarget::MaintainHealth { .. } => self.fat_fraction_maintain,
            GoalTarget::BuildMuscle { .. } => self.fat_fraction_build_muscle,
            GoalTarget::Unrecognized { .. } => self.fat_fraction_default,
        }
    }
}

/// Safety floors and energy balance constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Lowest daily target for males (1500 kcal)
    pub safe_min_calories_male: f64,
    /// Lowest daily target for females (1200 kcal)
    pub safe_min_calories_female: f64,
    /// kcal per kg of body mass change (7700)
    pub kcal_per_kg_body_mass: f64,
}

impl SafetyConfig {
    /// Calorie floor for a sex
    #[must_use]
    pub const fn safe_minimum(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.safe_min_calories_male,
            Sex::Female => self.safe_min_calories_female,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: bmr::WEIGHT_COEF,
            msj_height_coef: bmr::HEIGHT_COEF,
            msj_age_coef: bmr::AGE_COEF,
            msj_male_constant: bmr::MALE_CONSTANT,
            msj_female_constant: bmr::FEMALE_CONSTANT,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity::SEDENTARY,
            lightly_active: activity::LIGHTLY_ACTIVE,
            moderate: activity::MODERATE,
            very_active: activity::VERY_ACTIVE,
            athlete: activity::ATHLETE,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            deficit_slow: goals::DEFICIT_SLOW,
            deficit_moderate: goals::DEFICIT_MODERATE,
            deficit_fast: goals::DEFICIT_FAST,
            deficit_min: goals::DEFICIT_FLOOR,
            deficit_max: goals::DEFICIT_CEILING,
            surplus_beginner: goals::SURPLUS_BEGINNER,
            surplus_intermediate: goals::SURPLUS_INTERMEDIATE,
            surplus_advanced: goals::SURPLUS_ADVANCED,
            surplus_min: goals::SURPLUS_FLOOR,
            surplus_max: goals::SURPLUS_CEILING,
            minimal_fat_gain_reduction: goals::MINIMAL_FAT_GAIN_REDUCTION,
        }
    }
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            beginner_deficit: scaling::BEGINNER_DEFICIT,
            beginner_surplus: scaling::BEGINNER_SURPLUS,
            advanced_deficit: scaling::ADVANCED,
            advanced_surplus: scaling::ADVANCED,
            low_frequency_deficit: scaling::LOW_FREQUENCY,
            low_frequency_surplus: scaling::LOW_FREQUENCY,
            high_frequency_deficit: scaling::NEUTRAL,
            high_frequency_surplus: scaling::HIGH_FREQUENCY_SURPLUS,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_lose_weight: macros::PROTEIN_LOSE_WEIGHT.into(),
            protein_maintain: macros::PROTEIN_MAINTAIN.into(),
            protein_build_muscle: macros::PROTEIN_BUILD_MUSCLE.into(),
            fat_fraction_lose_weight: macros::FAT_FRACTION_DEFAULT,
            fat_fraction_maintain: macros::FAT_FRACTION_MAINTAIN,
            fat_fraction_build_muscle: macros::FAT_FRACTION_DEFAULT,
            fat_fraction_default: macros::FAT_FRACTION_DEFAULT,
            fat_min_fraction: macros::FAT_MIN_FRACTION,
            fat_max_fraction: macros::FAT_MAX_FRACTION,
            protein_fat_ceiling_fraction: macros::PROTEIN_FAT_CEILING_FRACTION,
            kcal_per_g_protein: macros::KCAL_PER_G_PROTEIN,
            kcal_per_g_carbs: macros::KCAL_PER_G_CARBS,
            kcal_per_g_fat: macros::KCAL_PER_G_FAT,
        }
    }
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            safe_min_calories_male: safety::SAFE_MIN_CALORIES_MALE,
            safe_min_calories_female: safety::SAFE_MIN_CALORIES_FEMALE,
            kcal_per_kg_body_mass: safety::KCAL_PER_KG_BODY_MASS,
        }
    }
}
