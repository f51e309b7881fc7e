//! # Error Types
//!
//! Structured error types for civil_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use civil_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "span_m".to_string(),
//!             value: span_m.to_string(),
//!             reason: "Span must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for civil_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material grade not found in the static grade tables
    #[error("Unknown {material} grade: {grade}")]
    UnknownGrade { material: String, grade: String },

    /// Unit not valid for the given conversion domain
    #[error("Unknown unit '{unit}' for domain '{domain}'")]
    UnknownUnit { unit: String, domain: String },

    /// Construction type outside the supported enumeration
    #[error("Unknown construction type: {construction_type}")]
    UnknownConstructionType { construction_type: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownGrade error
    pub fn unknown_grade(material: impl Into<String>, grade: impl Into<String>) -> Self {
        CalcError::UnknownGrade {
            material: material.into(),
            grade: grade.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>, domain: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            unit: unit.into(),
            domain: domain.into(),
        }
    }

    /// Create an UnknownConstructionType error
    pub fn unknown_construction_type(construction_type: impl Into<String>) -> Self {
        CalcError::UnknownConstructionType {
            construction_type: construction_type.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownConstructionType { .. } => "UNKNOWN_CONSTRUCTION_TYPE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("span_m", "-5.0", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::unknown_grade("concrete", "M40").error_code(),
            "UNKNOWN_GRADE"
        );
        assert_eq!(
            CalcError::unknown_unit("furlong", "length").error_code(),
            "UNKNOWN_UNIT"
        );
        assert_eq!(
            CalcError::unknown_construction_type("igloo").error_code(),
            "UNKNOWN_CONSTRUCTION_TYPE"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::unknown_grade("steel", "Fe600");
        assert_eq!(error.to_string(), "Unknown steel grade: Fe600");
    }
}
