// ABOUTME: Unit conversion constants for height, weight, and volume
// ABOUTME: Conversion factors between metric and imperial measurement units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters per foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per centimeter
pub const METERS_PER_CENTIMETER: f64 = 0.01;

/// Kilograms per pound
pub const KG_PER_POUND: f64 = 0.453_592;

/// Milliliters per US fluid ounce
pub const ML_PER_FLUID_OUNCE: f64 = 29.5735;
