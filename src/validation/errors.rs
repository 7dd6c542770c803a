//! Field-level validation failures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One violated field rule. Validation always reports the complete set of
/// violations for a record, never just the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as stored, e.g. "hectares"
    pub field: String,
    /// The rule the value had to satisfy
    pub expected: String,
    /// What was found instead
    pub actual: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "value to be present".into(),
            actual: "missing".into(),
        }
    }

    pub fn empty(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "non-empty value".into(),
            actual: "empty".into(),
        }
    }

    pub fn not_positive(field: impl Into<String>, value: f64) -> Self {
        Self {
            field: field.into(),
            expected: "value > 0".into(),
            actual: value.to_string(),
        }
    }

    pub fn negative(field: impl Into<String>, value: f64) -> Self {
        Self {
            field: field.into(),
            expected: "value >= 0".into(),
            actual: value.to_string(),
        }
    }

    pub fn unknown_label(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "label present in the current catalog".into(),
            actual: label.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}
