// ABOUTME: Profile input model consumed by the nutrition plan calculator
// ABOUTME: Sex, activity level, goal selection enums and the flat onboarding wire record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::DEFAULT_MAINTENANCE_FOCUS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Biological sex for BMR calculation and the safe calorie floor
///
/// Anything other than `male` selects the female equation and floor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (+5 kcal BMR constant, 1500 kcal floor)
    Male,
    /// Female (-161 kcal BMR constant, 1200 kcal floor)
    #[default]
    #[serde(other)]
    Female,
}

impl Sex {
    /// Wire identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise (1.2)
    Sedentary,
    /// Light exercise 1-3 days/week (1.375)
    LightlyActive,
    /// Moderate exercise 3-5 days/week (1.55)
    Moderate,
    /// Hard exercise 6-7 days/week (1.725)
    VeryActive,
    /// Hard training twice a day (1.9)
    Athlete,
    /// Missing or unrecognized, treated as sedentary
    #[default]
    #[serde(other)]
    Unspecified,
}

impl ActivityLevel {
    /// Wire identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly-active",
            Self::Moderate => "moderate",
            Self::VeryActive => "very-active",
            Self::Athlete => "athlete",
            Self::Unspecified => "unspecified",
        }
    }
}

/// Weight-loss pace
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    /// -250 kcal/day
    Slow,
    /// -500 kcal/day
    Moderate,
    /// -750 kcal/day
    Fast,
    /// -750 kcal/day
    Aggressive,
    /// Missing or unrecognized, treated as moderate
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Experience level, used for both strength training and dieting history
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// New to it
    Beginner,
    /// Some history
    Intermediate,
    /// Long history
    Advanced,
    /// Missing or unrecognized, treated as intermediate
    #[default]
    #[serde(other)]
    Unspecified,
}

impl ExperienceLevel {
    /// Wire identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Unspecified => "unspecified",
        }
    }
}

/// How much fat gain is acceptable while building muscle
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FatGainTolerance {
    /// Keep the surplus lean (-50 kcal/day)
    Minimal,
    /// Accept some fat gain
    Moderate,
    /// Missing or unrecognized
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Workouts per week
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutFrequency {
    /// 0-1 days per week
    #[serde(rename = "0-1")]
    ZeroToOne,
    /// 2-3 days per week
    #[serde(rename = "2-3")]
    TwoToThree,
    /// 4-6 days per week
    #[serde(rename = "4-6")]
    FourToSix,
    /// Missing or unrecognized, scales like 2-3
    #[default]
    #[serde(other, rename = "unspecified")]
    Unspecified,
}

impl WorkoutFrequency {
    /// Wire identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ZeroToOne => "0-1",
            Self::TwoToThree => "2-3",
            Self::FourToSix => "4-6",
            Self::Unspecified => "unspecified",
        }
    }
}

/// Goal chosen during onboarding, with the options that belong to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalTarget {
    /// Calorie deficit
    LoseWeight {
        /// Desired pace
        pace: Pace,
    },
    /// Calorie balance
    MaintainHealth {
        /// Free-form focus, only echoed in notes
        focus: Option<String>,
    },
    /// Calorie surplus
    BuildMuscle {
        /// Strength training history
        training_experience: ExperienceLevel,
        /// Acceptable fat gain
        fat_gain_tolerance: FatGainTolerance,
    },
    /// Goal identifier that matched none of the above
    Unrecognized {
        /// Raw identifier as supplied
        goal: String,
    },
}

impl GoalTarget {
    /// Wire identifier of the goal
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::LoseWeight { .. } => "lose_weight",
            Self::MaintainHealth { .. } => "maintain_health",
            Self::BuildMuscle { .. } => "build_muscle",
            Self::Unrecognized { goal } => goal,
        }
    }

    /// Focus for maintenance plans, defaulting to general health
    #[must_use]
    pub fn focus_or_default(&self) -> Option<&str> {
        match self {
            Self::MaintainHealth { focus } => {
                Some(focus.as_deref().unwrap_or(DEFAULT_MAINTENANCE_FOCUS))
            }
            _ => None,
        }
    }
}

/// Goal plus the options every goal reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSelection {
    /// Goal-specific choice
    pub target: GoalTarget,
    /// Workouts per week
    pub workout_frequency: WorkoutFrequency,
    /// Dieting history
    pub diet_experience: ExperienceLevel,
}

impl GoalSelection {
    /// Goal with no cross-cutting options set
    #[must_use]
    pub const fn new(target: GoalTarget) -> Self {
        Self {
            target,
            workout_frequency: WorkoutFrequency::Unspecified,
            diet_experience: ExperienceLevel::Unspecified,
        }
    }

    /// Set workout frequency
    #[must_use]
    pub const fn with_workout_frequency(mut self, frequency: WorkoutFrequency) -> Self {
        self.workout_frequency = frequency;
        self
    }

    /// Set diet experience
    #[must_use]
    pub const fn with_diet_experience(mut self, experience: ExperienceLevel) -> Self {
        self.diet_experience = experience;
        self
    }
}

/// Biometric and goal data for one calculation, metric units only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProfileRecord", into = "ProfileRecord")]
pub struct ProfileInput {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Height in meters
    pub height_meters: f64,
    /// Body mass in kilograms
    pub weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Goal and options
    pub goal: GoalSelection,
}

/// Youngest age the Mifflin-St Jeor equation is validated for
const MIN_AGE: u32 = 10;
/// Oldest accepted age
const MAX_AGE: u32 = 120;
/// Tallest accepted height in meters
const MAX_HEIGHT_METERS: f64 = 3.0;
/// Heaviest accepted body mass in kilograms
const MAX_WEIGHT_KG: f64 = 300.0;

impl ProfileInput {
    /// Check the numeric fields a caller must supply
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when age, height or weight is missing (zero),
    /// negative, non-finite, or implausibly large
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(AppError::out_of_range(
                "age",
                format!("Age must be between {MIN_AGE} and {MAX_AGE} years"),
            ));
        }
        if !self.height_meters.is_finite()
            || self.height_meters <= 0.0
            || self.height_meters > MAX_HEIGHT_METERS
        {
            return Err(AppError::out_of_range(
                "heightMeters",
                format!("Height must be between 0 and {MAX_HEIGHT_METERS} m"),
            ));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 || self.weight_kg > MAX_WEIGHT_KG
        {
            return Err(AppError::out_of_range(
                "weightKg",
                format!("Weight must be between 0 and {MAX_WEIGHT_KG} kg"),
            ));
        }
        Ok(())
    }
}

/// Flat JSON shape produced by the onboarding flow
///
/// `goalOptions` is one bag for every goal; conversion into [`ProfileInput`]
/// keeps only the options that belong to the chosen goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Age in years
    pub age: u32,
    /// Biological sex
    #[serde(default)]
    pub sex: Sex,
    /// Height in meters
    #[serde(alias = "heightMeters")]
    pub height: f64,
    /// Body mass in kilograms
    #[serde(alias = "weightKg")]
    pub weight: f64,
    /// Activity level identifier
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Goal identifier (`lose_weight`, `maintain_health`, `build_muscle`)
    #[serde(default)]
    pub goal: String,
    /// Options for the chosen goal
    #[serde(default)]
    pub goal_options: GoalOptionsRecord,
}

/// Goal options bag as collected by the questionnaire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoalOptionsRecord {
    /// Weight-loss pace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<Pace>,
    /// Maintenance focus
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    /// Strength training history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_experience: Option<ExperienceLevel>,
    /// Acceptable fat gain while bulking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_gain_tolerance: Option<FatGainTolerance>,
    /// Workouts per week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_frequency: Option<WorkoutFrequency>,
    /// Dieting history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_experience: Option<ExperienceLevel>,
}

impl GoalOptionsRecord {
    /// Build the typed goal selection for a goal identifier
    #[must_use]
    pub fn into_selection(self, goal: &str) -> GoalSelection {
        let target = match goal {
            "lose_weight" => GoalTarget::LoseWeight {
                pace: self.pace.unwrap_or_default(),
            },
            "maintain_health" => GoalTarget::MaintainHealth { focus: self.focus },
            "build_muscle" => GoalTarget::BuildMuscle {
                training_experience: self.training_experience.unwrap_or_default(),
                fat_gain_tolerance: self.fat_gain_tolerance.unwrap_or_default(),
            },
            other => GoalTarget::Unrecognized {
                goal: other.to_owned(),
            },
        };

        GoalSelection {
            target,
            workout_frequency: self.workout_frequency.unwrap_or_default(),
            diet_experience: self.diet_experience.unwrap_or_default(),
        }
    }
}

impl From<ProfileRecord> for ProfileInput {
    fn from(record: ProfileRecord) -> Self {
        let goal = record.goal_options.into_selection(&record.goal);
        Self {
            age: record.age,
            sex: record.sex,
            height_meters: record.height,
            weight_kg: record.weight,
            activity_level: record.activity_level,
            goal,
        }
    }
}

impl From<GoalSelection> for GoalOptionsRecord {
    fn from(selection: GoalSelection) -> Self {
        let mut options = Self {
            workout_frequency: Some(selection.workout_frequency)
                .filter(|f| *f != WorkoutFrequency::Unspecified),
            diet_experience: Some(selection.diet_experience)
                .filter(|e| *e != ExperienceLevel::Unspecified),
            ..Self::default()
        };
        match selection.target {
            GoalTarget::LoseWeight { pace } => options.pace = Some(pace),
            GoalTarget::MaintainHealth { focus } => options.focus = focus,
            GoalTarget::BuildMuscle {
                training_experience,
                fat_gain_tolerance,
            } => {
                options.training_experience = Some(training_experience);
                options.fat_gain_tolerance = Some(fat_gain_tolerance);
            }
            GoalTarget::Unrecognized { .. } => {}
        }
        options
    }
}

impl From<ProfileInput> for ProfileRecord {
    fn from(profile: ProfileInput) -> Self {
        Self {
            age: profile.age,
            sex: profile.sex,
            height: profile.height_meters,
            weight: profile.weight_kg,
            activity_level: profile.activity_level,
            goal: profile.goal.target.id().to_owned(),
            goal_options: profile.goal.into(),
        }
    }
}
