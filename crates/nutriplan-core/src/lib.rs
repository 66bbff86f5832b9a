// ABOUTME: Core types and constants for the Nutriplan nutrition planner
// ABOUTME: Foundation crate with error handling, nutrition constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for the Nutriplan
//! nutrition planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrition and unit-conversion constants organized by domain
//! - **models**: Profile input and nutrition plan records

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition and measurement constants organized by domain
pub mod constants;

/// Core data models (`ProfileInput`, `NutritionPlan`, goal selection)
pub mod models;
