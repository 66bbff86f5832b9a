// ABOUTME: Onboarding questionnaire answers and their mapping onto calculator profiles
// ABOUTME: Seven-step flow tracking, questionnaire id translation, and metric conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Onboarding
//!
//! The questionnaire collects answers in the user's units and with its own
//! option ids (`moderately-active`, `lose-weight`, ...). [`OnboardingAnswers::into_profile`]
//! turns them into the metric [`ProfileInput`] the calculator expects.

/// Unit preferences and conversions
pub mod units;

pub use units::{HeightUnit, LengthUnit, UnitPreferences, VolumeUnit, WeightUnit};

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{ActivityLevel, GoalOptionsRecord, ProfileInput, ProfileRecord, Sex};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Questionnaire steps after the welcome screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Age and sex
    AgeAndSex = 1,
    /// Height and weight
    BodyMeasurements = 2,
    /// Daily activity
    ActivityLevel = 3,
    /// Primary goal
    Goal = 4,
    /// Options for the chosen goal
    GoalDetails = 5,
    /// Workout frequency and diet experience
    Lifestyle = 6,
    /// Computed plan
    Review = 7,
}

impl OnboardingStep {
    /// Number of steps
    pub const COUNT: u8 = 7;

    /// All steps in order
    pub const ALL: [Self; 7] = [
        Self::AgeAndSex,
        Self::BodyMeasurements,
        Self::ActivityLevel,
        Self::Goal,
        Self::GoalDetails,
        Self::Lifestyle,
        Self::Review,
    ];

    /// 1-based position
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Step after this one, `None` on review
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::AgeAndSex => Some(Self::BodyMeasurements),
            Self::BodyMeasurements => Some(Self::ActivityLevel),
            Self::ActivityLevel => Some(Self::Goal),
            Self::Goal => Some(Self::GoalDetails),
            Self::GoalDetails => Some(Self::Lifestyle),
            Self::Lifestyle => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// Step before this one, `None` on the first step
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::AgeAndSex => None,
            Self::BodyMeasurements => Some(Self::AgeAndSex),
            Self::ActivityLevel => Some(Self::BodyMeasurements),
            Self::Goal => Some(Self::ActivityLevel),
            Self::GoalDetails => Some(Self::Goal),
            Self::Lifestyle => Some(Self::GoalDetails),
            Self::Review => Some(Self::Lifestyle),
        }
    }

    /// Progress bar fill, 0-100
    #[must_use]
    pub fn progress_percent(self) -> f64 {
        f64::from(self.number()) / f64::from(Self::COUNT) * 100.0
    }

    /// Heading shown for the step
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AgeAndSex => "Age and Sex",
            Self::BodyMeasurements => "Height and Weight",
            Self::ActivityLevel => "Activity Level",
            Self::Goal => "Primary Goal",
            Self::GoalDetails => "Goal Details",
            Self::Lifestyle => "Workout & Diet Experience",
            Self::Review => "Your Plan",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}: {}", self.number(), Self::COUNT, self.title())
    }
}

/// Map a questionnaire activity id to the calculator's activity level
///
/// Missing or unknown ids map to moderate.
#[must_use]
pub fn map_activity_level(id: Option<&str>) -> ActivityLevel {
    match id.map(str::trim) {
        Some("sedentary") => ActivityLevel::Sedentary,
        Some("lightly-active") => ActivityLevel::LightlyActive,
        Some("very-active") => ActivityLevel::VeryActive,
        Some("extra-active") => ActivityLevel::Athlete,
        // "moderately-active" lands here too
        _ => ActivityLevel::Moderate,
    }
}

/// Map a questionnaire goal id to the calculator's goal id
///
/// Unknown ids pass through unchanged and end up unrecognized.
#[must_use]
pub fn map_goal(id: &str) -> &str {
    match id {
        "lose-weight" => "lose_weight",
        "maintain-health" => "maintain_health",
        "build-muscle" => "build_muscle",
        other => other,
    }
}

/// Title for a questionnaire goal id
#[must_use]
pub fn goal_title(id: &str) -> &'static str {
    match id {
        "lose-weight" => "Lose Weight",
        "maintain-health" => "Maintain Health",
        "build-muscle" => "Build Muscle",
        _ => "Fitness Goal",
    }
}

/// Goal options as the questionnaire stores them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnboardingGoalOptions {
    /// Options the calculator reads
    #[serde(flatten)]
    pub plan: GoalOptionsRecord,
    /// Lifting days per week, asked for muscle gain but not used in the plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_training_days: Option<String>,
}

/// Raw answers collected by the questionnaire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnboardingAnswers {
    /// Age in years
    pub age: Option<u32>,
    /// Biological sex
    pub sex: Option<Sex>,
    /// Height in `height_unit`
    pub height: Option<f64>,
    /// Unit of `height`, defaults from the length preference
    pub height_unit: Option<HeightUnit>,
    /// Weight in `weight_unit`
    pub weight: Option<f64>,
    /// Unit of `weight`, defaults from the weight preference
    pub weight_unit: Option<WeightUnit>,
    /// Questionnaire activity id
    pub activity_level: Option<String>,
    /// Questionnaire goal id
    pub goal: Option<String>,
    /// Goal options
    pub goal_options: OnboardingGoalOptions,
    /// Display units
    pub units: UnitPreferences,
}

impl OnboardingAnswers {
    /// Effective unit for the height answer
    #[must_use]
    pub fn effective_height_unit(&self) -> HeightUnit {
        self.height_unit
            .unwrap_or_else(|| self.units.default_height_unit())
    }

    /// Effective unit for the weight answer
    #[must_use]
    pub fn effective_weight_unit(&self) -> WeightUnit {
        self.weight_unit.unwrap_or(self.units.weight_unit)
    }

    /// Fields a step still needs before the flow can move on
    ///
    /// Names use the questionnaire's camelCase keys.
    #[must_use]
    pub fn missing_for(&self, step: OnboardingStep) -> Vec<&'static str> {
        let options = &self.goal_options;
        let mut missing = Vec::new();
        match step {
            OnboardingStep::AgeAndSex => {
                push_if(&mut missing, self.age.is_none_or(|a| a == 0), "age");
                push_if(&mut missing, self.sex.is_none(), "sex");
            }
            OnboardingStep::BodyMeasurements => {
                push_if(&mut missing, !is_positive(self.height), "height");
                push_if(&mut missing, !is_positive(self.weight), "weight");
            }
            OnboardingStep::ActivityLevel => {
                push_if(&mut missing, is_blank(self.activity_level.as_deref()), "activityLevel");
            }
            OnboardingStep::Goal => {
                push_if(&mut missing, is_blank(self.goal.as_deref()), "goal");
            }
            OnboardingStep::GoalDetails => match self.goal.as_deref() {
                Some("lose-weight") => {
                    push_if(&mut missing, options.plan.pace.is_none(), "pace");
                }
                Some("maintain-health") => {
                    push_if(&mut missing, is_blank(options.plan.focus.as_deref()), "focus");
                }
                Some("build-muscle") => {
                    push_if(
                        &mut missing,
                        options.plan.training_experience.is_none(),
                        "trainingExperience",
                    );
                    push_if(
                        &mut missing,
                        is_blank(options.strength_training_days.as_deref()),
                        "strengthTrainingDays",
                    );
                    push_if(
                        &mut missing,
                        options.plan.fat_gain_tolerance.is_none(),
                        "fatGainTolerance",
                    );
                }
                _ => {}
            },
            OnboardingStep::Lifestyle => {
                push_if(
                    &mut missing,
                    options.plan.workout_frequency.is_none(),
                    "workoutFrequency",
                );
                push_if(
                    &mut missing,
                    options.plan.diet_experience.is_none(),
                    "dietExperience",
                );
            }
            OnboardingStep::Review => {}
        }
        missing
    }

    /// First step with unanswered fields, `Review` when everything is in
    #[must_use]
    pub fn current_step(&self) -> OnboardingStep {
        OnboardingStep::ALL
            .into_iter()
            .find(|step| !self.missing_for(*step).is_empty())
            .unwrap_or(OnboardingStep::Review)
    }

    /// Build the calculator profile from these answers
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when age, sex, height or weight is
    /// absent, and `ValueOutOfRange` when a measurement is not positive or the
    /// converted profile fails validation
    pub fn into_profile(&self) -> AppResult<ProfileInput> {
        let age = self.age.ok_or_else(|| AppError::missing_field("age"))?;
        let sex = self.sex.ok_or_else(|| AppError::missing_field("sex"))?;
        let height = positive_measurement(self.height, "height")?;
        let weight = positive_measurement(self.weight, "weight")?;

        let height_unit = self.effective_height_unit();
        let weight_unit = self.effective_weight_unit();
        let goal = map_goal(self.goal.as_deref().unwrap_or_default());
        debug!(
            "Mapping onboarding answers: height {height} {}, weight {weight} {}, goal '{goal}'",
            height_unit.as_str(),
            weight_unit.as_str()
        );

        let record = ProfileRecord {
            age,
            sex,
            height: units::height_to_meters(height, height_unit),
            weight: units::weight_to_kg(weight, weight_unit),
            activity_level: map_activity_level(self.activity_level.as_deref()),
            goal: goal.to_owned(),
            goal_options: self.goal_options.plan.clone(),
        };
        let profile = ProfileInput::from(record);
        profile.validate()?;
        Ok(profile)
    }
}

fn push_if(missing: &mut Vec<&'static str>, condition: bool, field: &'static str) {
    if condition {
        missing.push(field);
    }
}

fn is_positive(value: Option<f64>) -> bool {
    value.is_some_and(|v| v.is_finite() && v > 0.0)
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn positive_measurement(value: Option<f64>, field: &str) -> AppResult<f64> {
    let value = value.ok_or_else(|| AppError::missing_field(field))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::out_of_range(
            field,
            format!("{field} must be a positive number"),
        ))
    }
}
