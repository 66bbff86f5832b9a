// ABOUTME: Measurement unit preferences and conversions between imperial and metric
// ABOUTME: Height, weight, and volume conversions used before and after plan calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit conversion
//!
//! The calculator only sees meters and kilograms. Answers typed in feet or
//! pounds are converted here, and the inverses are used when showing values
//! back in the user's preferred units.

use nutriplan_core::constants::units::{
    KG_PER_POUND, METERS_PER_CENTIMETER, METERS_PER_FOOT, ML_PER_FLUID_OUNCE,
};
use serde::{Deserialize, Serialize};

/// Preferred unit for body weight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    Lb,
}

/// Preferred unit for lengths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Meters (heights entered in centimeters)
    #[default]
    M,
    /// Feet
    Ft,
}

/// Preferred unit for fluid volumes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    /// Milliliters
    #[default]
    #[serde(rename = "ml")]
    Ml,
    /// US fluid ounces
    #[serde(rename = "fl oz", alias = "floz")]
    FlOz,
}

/// Unit a height answer was typed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    /// Centimeters
    #[default]
    Cm,
    /// Decimal feet
    Ft,
}

impl WeightUnit {
    /// Display symbol
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lb => "lb",
        }
    }
}

impl LengthUnit {
    /// Display symbol
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::M => "m",
            Self::Ft => "ft",
        }
    }
}

impl VolumeUnit {
    /// Display symbol
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ml => "ml",
            Self::FlOz => "fl oz",
        }
    }
}

impl HeightUnit {
    /// Display symbol
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Ft => "ft",
        }
    }
}

impl From<LengthUnit> for HeightUnit {
    fn from(unit: LengthUnit) -> Self {
        match unit {
            LengthUnit::M => Self::Cm,
            LengthUnit::Ft => Self::Ft,
        }
    }
}

/// Units a user prefers to see; kg / m / ml unless set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitPreferences {
    /// Body weight unit
    pub weight_unit: WeightUnit,
    /// Length unit
    pub length_unit: LengthUnit,
    /// Volume unit
    pub volume_unit: VolumeUnit,
}

impl UnitPreferences {
    /// Unit the height question starts in
    #[must_use]
    pub fn default_height_unit(&self) -> HeightUnit {
        self.length_unit.into()
    }
}

/// Convert a height answer to meters
#[must_use]
pub fn height_to_meters(value: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Cm => value * METERS_PER_CENTIMETER,
        HeightUnit::Ft => value * METERS_PER_FOOT,
    }
}

/// Convert meters back into a height unit
#[must_use]
pub fn meters_to_height(meters: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Cm => meters / METERS_PER_CENTIMETER,
        HeightUnit::Ft => meters / METERS_PER_FOOT,
    }
}

/// Convert a weight answer to kilograms
#[must_use]
pub fn weight_to_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => value,
        WeightUnit::Lb => value * KG_PER_POUND,
    }
}

/// Convert kilograms into a weight unit
#[must_use]
pub fn kg_to_weight(kg: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => kg,
        WeightUnit::Lb => kg / KG_PER_POUND,
    }
}

/// Convert a volume to milliliters
#[must_use]
pub fn volume_to_ml(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Ml => value,
        VolumeUnit::FlOz => value * ML_PER_FLUID_OUNCE,
    }
}

/// Convert milliliters into a volume unit
#[must_use]
pub fn ml_to_volume(ml: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Ml => ml,
        VolumeUnit::FlOz => ml / ML_PER_FLUID_OUNCE,
    }
}
