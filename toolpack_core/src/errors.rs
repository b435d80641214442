//! # Error Types
//!
//! Structured error types for toolpack_core. Every variant corresponds to a
//! user-visible validation notice; nothing in this crate is fatal. Inputs
//! that are merely unparseable or out of range are silently corrected by the
//! [`crate::format`] helpers and per-tool clamps and never reach an error.
//!
//! ## Example
//!
//! ```rust
//! use toolpack_core::errors::{ToolError, ToolResult};
//!
//! fn validate_range(min: i64, max: i64) -> ToolResult<()> {
//!     if min > max {
//!         return Err(ToolError::invalid_range(min, max));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for toolpack_core operations
pub type ToolResult<T> = Result<T, ToolError>;

/// Structured error type for calculator operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// front ends to render a precise notice instead of a generic failure.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ToolError {
    /// An input value is invalid (empty content, favorite outside range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The minimum of a numeric range exceeds its maximum
    #[error("Invalid range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: i64, max: i64 },

    /// More unique draws were requested than the pool can supply
    #[error("Not enough items: requested {requested}, only {available} available")]
    NotEnoughItems { requested: u64, available: u64 },

    /// A start date lies after the end date it should precede
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: String, end: String },
}

impl ToolError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ToolError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidRange error
    pub fn invalid_range(min: i64, max: i64) -> Self {
        ToolError::InvalidRange { min, max }
    }

    /// Create a NotEnoughItems error
    pub fn not_enough_items(requested: u64, available: u64) -> Self {
        ToolError::NotEnoughItems {
            requested,
            available,
        }
    }

    /// Create an InvalidDateRange error
    pub fn invalid_date_range(start: impl Into<String>, end: impl Into<String>) -> Self {
        ToolError::InvalidDateRange {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ToolError::InvalidInput { .. } => "INVALID_INPUT",
            ToolError::InvalidRange { .. } => "INVALID_RANGE",
            ToolError::NotEnoughItems { .. } => "NOT_ENOUGH_ITEMS",
            ToolError::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ToolError::invalid_input("content", "", "Content must not be empty");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ToolError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ToolError::invalid_range(9, 3).error_code(), "INVALID_RANGE");
        assert_eq!(
            ToolError::not_enough_items(10, 5).error_code(),
            "NOT_ENOUGH_ITEMS"
        );
    }

    #[test]
    fn test_display_message() {
        let error = ToolError::invalid_range(9, 3);
        assert_eq!(
            error.to_string(),
            "Invalid range: minimum 9 exceeds maximum 3"
        );
    }
}
