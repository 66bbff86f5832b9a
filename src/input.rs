// ABOUTME: Reads profile and onboarding JSON documents from files or stdin
// ABOUTME: Parses with serde_json and validates profiles before they reach the calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::onboarding::OnboardingAnswers;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::ProfileInput;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Source name that selects stdin
pub const STDIN_SOURCE: &str = "-";

/// Read a whole document from a path, or from stdin for `-`
///
/// # Errors
///
/// Returns `InvalidInput` if the file or stdin cannot be read
pub fn read_source(source: &str) -> AppResult<String> {
    if source == STDIN_SOURCE {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(|e| {
            AppError::invalid_input(format!("Cannot read stdin: {e}")).with_source(e)
        })?;
        return Ok(buffer);
    }

    let path = Path::new(source);
    debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })
}

/// Parse a JSON document from a path or stdin
///
/// # Errors
///
/// Returns an error if the source cannot be read or is not valid JSON for `T`
pub fn load_json<T: DeserializeOwned>(source: &str) -> AppResult<T> {
    let text = read_source(source)?;
    Ok(serde_json::from_str(&text)?)
}

/// Load and validate a profile record
///
/// # Errors
///
/// Returns an error if the source cannot be read or parsed, or if age, height
/// or weight is missing or out of range
pub fn load_profile(source: &str) -> AppResult<ProfileInput> {
    let profile: ProfileInput = load_json(source)?;
    profile.validate()?;
    Ok(profile)
}

/// Load questionnaire answers
///
/// # Errors
///
/// Returns an error if the source cannot be read or parsed
pub fn load_answers(source: &str) -> AppResult<OnboardingAnswers> {
    load_json(source)
}
