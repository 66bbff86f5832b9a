// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for nutrition planning and unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Configuration defaults are built from these values.

/// Energy, BMR, goal and macronutrient constants
pub mod nutrition;
/// Unit conversion and measurement constants
pub mod units;
