// ABOUTME: Nutrition planning constants: BMR coefficients, activity factors, goal tables
// ABOUTME: Default values for calorie adjustments, protein ranges, fat bounds, and energy balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition planning constants
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology.

/// Mifflin-St Jeor equation coefficients
pub mod bmr {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age
    pub const AGE_COEF: f64 = -5.0;
    /// Constant term for males
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Constant term for females
    pub const FEMALE_CONSTANT: f64 = -161.0;
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
}

/// TDEE multipliers by activity level
pub mod activity {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHTLY_ACTIVE: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const VERY_ACTIVE: f64 = 1.725;
    /// Hard training twice a day
    pub const ATHLETE: f64 = 1.9;
}

/// Calorie adjustment tables and clamps, kcal/day
pub mod goals {
    /// Slow weight-loss pace
    pub const DEFICIT_SLOW: f64 = -250.0;
    /// Moderate weight-loss pace (also the fallback)
    pub const DEFICIT_MODERATE: f64 = -500.0;
    /// Fast and aggressive weight-loss pace
    pub const DEFICIT_FAST: f64 = -750.0;
    /// Largest allowed deficit
    pub const DEFICIT_FLOOR: f64 = -750.0;
    /// Smallest allowed deficit
    pub const DEFICIT_CEILING: f64 = -250.0;

    /// Surplus for beginner lifters
    pub const SURPLUS_BEGINNER: f64 = 300.0;
    /// Surplus for intermediate lifters (also the fallback)
    pub const SURPLUS_INTERMEDIATE: f64 = 250.0;
    /// Surplus for advanced lifters
    pub const SURPLUS_ADVANCED: f64 = 200.0;
    /// Smallest allowed surplus
    pub const SURPLUS_FLOOR: f64 = 150.0;
    /// Largest allowed surplus
    pub const SURPLUS_CEILING: f64 = 400.0;
    /// Surplus reduction when fat gain should be minimal
    pub const MINIMAL_FAT_GAIN_REDUCTION: f64 = 50.0;
}

/// Aggression scaling by diet experience and workout frequency
pub mod scaling {
    /// Beginner diet experience, deficit
    pub const BEGINNER_DEFICIT: f64 = 0.7;
    /// Beginner diet experience, surplus
    pub const BEGINNER_SURPLUS: f64 = 0.8;
    /// Advanced diet experience, deficit or surplus
    pub const ADVANCED: f64 = 1.1;
    /// 0-1 workouts per week, deficit or surplus
    pub const LOW_FREQUENCY: f64 = 0.7;
    /// 4-6 workouts per week, surplus
    pub const HIGH_FREQUENCY_SURPLUS: f64 = 1.1;
    /// Neutral factor
    pub const NEUTRAL: f64 = 1.0;
}

/// Macronutrient constants
pub mod macros {
    /// Protein range for weight loss (g/kg)
    pub const PROTEIN_LOSE_WEIGHT: (f64, f64) = (1.6, 2.2);
    /// Protein range for maintenance (g/kg), also the fallback range
    pub const PROTEIN_MAINTAIN: (f64, f64) = (1.2, 1.6);
    /// Protein range for muscle gain (g/kg)
    pub const PROTEIN_BUILD_MUSCLE: (f64, f64) = (1.6, 2.0);

    /// Fat share of calories for weight loss, muscle gain, and unrecognized goals
    pub const FAT_FRACTION_DEFAULT: f64 = 0.25;
    /// Fat share of calories for maintenance
    pub const FAT_FRACTION_MAINTAIN: f64 = 0.30;
    /// Lowest allowed fat share
    pub const FAT_MIN_FRACTION: f64 = 0.20;
    /// Highest allowed fat share
    pub const FAT_MAX_FRACTION: f64 = 0.35;
    /// Protein plus fat may take at most this share when squeezing fat
    pub const PROTEIN_FAT_CEILING_FRACTION: f64 = 0.4;

    /// kcal per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// kcal per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// kcal per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Safety floors and energy balance
pub mod safety {
    /// Lowest daily target for males
    pub const SAFE_MIN_CALORIES_MALE: f64 = 1500.0;
    /// Lowest daily target for females
    pub const SAFE_MIN_CALORIES_FEMALE: f64 = 1200.0;
    /// Energy content of 1 kg of body mass change
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;
    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Focus recorded for maintenance plans when none was chosen
pub const DEFAULT_MAINTENANCE_FOCUS: &str = "general_health";

/// Diet experience shown in notes when none was chosen
pub const DEFAULT_DIET_EXPERIENCE_LABEL: &str = "intermediate";

/// Workout frequency shown in notes when none was chosen
pub const DEFAULT_WORKOUT_FREQUENCY_LABEL: &str = "2-3";
