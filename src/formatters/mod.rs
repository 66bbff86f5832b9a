// ABOUTME: Output format abstraction for writing plans and profiles as JSON or text
// ABOUTME: JSON mirrors the wire records; text renders the review-screen summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, the camelCase wire records
//! - **Text**: Aligned plain text for terminals
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nutriplan::formatters::{format_plan, OutputFormat};
//! use nutriplan::intelligence::compute_nutrition_plan;
//! # fn demo(profile: &nutriplan_core::models::ProfileInput) {
//! let plan = compute_nutrition_plan(profile);
//! if let Ok(output) = format_plan(&plan, profile.weight_kg, OutputFormat::Text, false) {
//!     println!("{}", output.data);
//! }
//! # }
//! ```

/// Review-screen summary
pub mod summary;

pub use summary::{MacroSummary, PlanSummary};

use nutriplan_core::errors::AppError;
use nutriplan_core::models::NutritionPlan;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// Plain text for terminals
    Text,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Self::Text,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!("unknown output format '{other}' (expected json or text)")),
        }
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

impl FormattedOutput {
    fn new(data: String, format: OutputFormat) -> Self {
        Self {
            data,
            format,
            content_type: format.content_type(),
        }
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Format serializable data to the specified output format
///
/// Text renders each top-level field as a `key: value` line; nested values
/// stay compact JSON.
///
/// # Errors
///
/// Returns `FormatError` if the data cannot be serialized
pub fn format_output<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Text => render_text(data, format)?,
    };
    Ok(FormattedOutput::new(data, format))
}

/// Format serializable data to pretty-printed output
///
/// # Errors
///
/// Returns `FormatError` if the data cannot be serialized
pub fn format_output_pretty<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        // Text is already laid out for reading
        OutputFormat::Text => render_text(data, format)?,
    };
    Ok(FormattedOutput::new(data, format))
}

/// Format a nutrition plan
///
/// JSON writes the plan record; text writes the [`PlanSummary`] for
/// `weight_kg`, which only the protein-per-kg line uses.
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_plan(
    plan: &NutritionPlan,
    weight_kg: f64,
    format: OutputFormat,
    pretty: bool,
) -> Result<FormattedOutput, FormatError> {
    match format {
        OutputFormat::Json if pretty => format_output_pretty(plan, format),
        OutputFormat::Json => format_output(plan, format),
        OutputFormat::Text => Ok(FormattedOutput::new(
            PlanSummary::from_plan(plan, weight_kg).to_string(),
            format,
        )),
    }
}

fn render_text<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format,
    })?;

    let Value::Object(fields) = value else {
        return Ok(scalar_text(&value));
    };

    let width = fields.keys().map(String::len).max().unwrap_or_default() + 1;
    let mut out = String::new();
    for (key, field) in &fields {
        let label = format!("{key}:");
        // Writing to a String cannot fail
        let _ = writeln!(out, "{label:<width$} {}", scalar_text(field));
    }
    Ok(out)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_owned(),
        other => other.to_string(),
    }
}
