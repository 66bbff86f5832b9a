// ABOUTME: Configuration layer for the nutrition planner with env overrides and validation
// ABOUTME: Loads defaults, applies NUTRIPLAN_* variables, and caches a validated global config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition planner configuration
//!
//! [`NutritionPlanConfig::default`] reproduces the published plan rules.
//! [`NutritionPlanConfig::load`] layers `NUTRIPLAN_*` environment overrides on
//! top and rejects combinations the calculator cannot honor.

/// Configuration error types
pub mod error;
/// Nutrition plan tables
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, AdjustmentKind, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig,
    NutritionPlanConfig, ProteinRange, SafetyConfig, ScalingConfig,
};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static NUTRITION_PLAN_CONFIG: OnceLock<NutritionPlanConfig> = OnceLock::new();

impl NutritionPlanConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once on first access; a failed load logs a warning and uses defaults.
    pub fn global() -> &'static Self {
        NUTRITION_PLAN_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition plan config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any table holds values the calculator cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;
        self.validate_bmr()?;
        self.validate_activity_factors()?;
        self.validate_goal_adjustments()?;
        self.validate_macronutrients()?;
        self.validate_safety()
    }

    /// NaN compares false against every bound below, so it must be caught first
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        let factors = &self.activity_factors;
        let goals = &self.goal_adjustments;
        let scaling = &self.scaling;
        let macros = &self.macronutrients;
        let safety = &self.safety;
        let values = [
            bmr.msj_weight_coef,
            bmr.msj_height_coef,
            bmr.msj_age_coef,
            bmr.msj_male_constant,
            bmr.msj_female_constant,
            factors.sedentary,
            factors.lightly_active,
            factors.moderate,
            factors.very_active,
            factors.athlete,
            goals.deficit_slow,
            goals.deficit_moderate,
            goals.deficit_fast,
            goals.deficit_min,
            goals.deficit_max,
            goals.surplus_beginner,
            goals.surplus_intermediate,
            goals.surplus_advanced,
            goals.surplus_min,
            goals.surplus_max,
            goals.minimal_fat_gain_reduction,
            scaling.beginner_deficit,
            scaling.beginner_surplus,
            scaling.advanced_deficit,
            scaling.advanced_surplus,
            scaling.low_frequency_deficit,
            scaling.low_frequency_surplus,
            scaling.high_frequency_deficit,
            scaling.high_frequency_surplus,
            macros.protein_lose_weight.min_g_per_kg,
            macros.protein_lose_weight.max_g_per_kg,
            macros.protein_maintain.min_g_per_kg,
            macros.protein_maintain.max_g_per_kg,
            macros.protein_build_muscle.min_g_per_kg,
            macros.protein_build_muscle.max_g_per_kg,
            macros.fat_fraction_lose_weight,
            macros.fat_fraction_maintain,
            macros.fat_fraction_build_muscle,
            macros.fat_fraction_default,
            macros.fat_min_fraction,
            macros.fat_max_fraction,
            macros.protein_fat_ceiling_fraction,
            macros.kcal_per_g_protein,
            macros.kcal_per_g_carbs,
            macros.kcal_per_g_fat,
            safety.safe_min_calories_male,
            safety.safe_min_calories_female,
            safety.kcal_per_kg_body_mass,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "Configuration values must be finite",
            ));
        }
        Ok(())
    }

    fn validate_bmr(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        Ok(())
    }

    fn validate_activity_factors(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be at least 1.0",
            ));
        }
        let ascending = factors.sedentary <= factors.lightly_active
            && factors.lightly_active <= factors.moderate
            && factors.moderate <= factors.very_active
            && factors.very_active <= factors.athlete;
        if !ascending {
            return Err(ConfigError::InvalidRange(
                "Activity factors must ascend from sedentary to athlete",
            ));
        }
        Ok(())
    }

    fn validate_goal_adjustments(&self) -> Result<(), ConfigError> {
        let goals = &self.goal_adjustments;
        if goals.deficit_min >= 0.0 || goals.deficit_max >= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Deficit bounds must be negative",
            ));
        }
        if goals.deficit_min >= goals.deficit_max {
            return Err(ConfigError::InvalidRange(
                "deficit_min must be < deficit_max",
            ));
        }
        if goals.surplus_min <= 0.0 || goals.surplus_max <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Surplus bounds must be positive",
            ));
        }
        if goals.surplus_min >= goals.surplus_max {
            return Err(ConfigError::InvalidRange(
                "surplus_min must be < surplus_max",
            ));
        }
        Ok(())
    }

    fn validate_macronutrients(&self) -> Result<(), ConfigError> {
        let macros = &self.macronutrients;
        let ranges = [
            macros.protein_lose_weight,
            macros.protein_maintain,
            macros.protein_build_muscle,
        ];
        if ranges
            .iter()
            .any(|r| r.min_g_per_kg <= 0.0 || r.min_g_per_kg > r.max_g_per_kg)
        {
            return Err(ConfigError::InvalidRange(
                "Protein ranges must be positive with min <= max",
            ));
        }

        let fraction_in_unit = |f: f64| f > 0.0 && f < 1.0;
        if !fraction_in_unit(macros.fat_min_fraction) || !fraction_in_unit(macros.fat_max_fraction)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Fat fraction bounds must be between 0 and 1",
            ));
        }
        if macros.fat_min_fraction >= macros.fat_max_fraction {
            return Err(ConfigError::InvalidRange(
                "fat_min_fraction must be < fat_max_fraction",
            ));
        }
        if macros.kcal_per_g_protein <= 0.0
            || macros.kcal_per_g_carbs <= 0.0
            || macros.kcal_per_g_fat <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Energy per gram must be positive",
            ));
        }
        Ok(())
    }

    fn validate_safety(&self) -> Result<(), ConfigError> {
        if self.safety.safe_min_calories_male <= 0.0 || self.safety.safe_min_calories_female <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Safe calorie minimums must be positive",
            ));
        }
        if self.safety.kcal_per_kg_body_mass <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "kcal per kg of body mass must be positive",
            ));
        }
        Ok(())
    }

    /// Apply a single environment variable override, leaving `target` alone when unset
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Safety floors
        Self::apply_env_var(
            "NUTRIPLAN_SAFE_MIN_CALORIES_MALE",
            &mut self.safety.safe_min_calories_male,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_SAFE_MIN_CALORIES_FEMALE",
            &mut self.safety.safe_min_calories_female,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_KCAL_PER_KG",
            &mut self.safety.kcal_per_kg_body_mass,
        )?;

        // Fat bounds
        Self::apply_env_var(
            "NUTRIPLAN_FAT_MIN_FRACTION",
            &mut self.macronutrients.fat_min_fraction,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_FAT_MAX_FRACTION",
            &mut self.macronutrients.fat_max_fraction,
        )?;

        // Adjustment clamps
        Self::apply_env_var(
            "NUTRIPLAN_DEFICIT_MIN",
            &mut self.goal_adjustments.deficit_min,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_DEFICIT_MAX",
            &mut self.goal_adjustments.deficit_max,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_SURPLUS_MIN",
            &mut self.goal_adjustments.surplus_min,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_SURPLUS_MAX",
            &mut self.goal_adjustments.surplus_max,
        )?;

        Ok(self)
    }
}
