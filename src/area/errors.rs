//! # Area Errors
//!
//! Typed failures for area mutations. All recoverable by the caller; the
//! surrounding UI/API layer decides presentation.

use thiserror::Error;
use uuid::Uuid;

use crate::permissions::Capability;
use crate::validation::FieldError;

/// Result type for area operations
pub type AreaResult<T> = Result<T, AreaError>;

/// Failures from the area lifecycle engine and store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AreaError {
    /// The acting capability set lacks the required flag. Always raised
    /// before validation so an unauthorized caller learns nothing about
    /// their payload.
    #[error("permission denied: missing capability '{0}'")]
    PermissionDenied(Capability),

    /// One or more field rules violated; the complete set, never truncated.
    #[error("validation failed: {} violation(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Mutation target does not exist in the current snapshot.
    #[error("area not found: {0}")]
    NotFound(Uuid),

    /// The caller's last-observed version no longer matches the record.
    #[error("stale write: caller saw version {observed}, record is at {current}")]
    StaleWrite { observed: u64, current: u64 },

    /// Required configuration is absent.
    #[error("configuration missing: {0}")]
    ConfigurationMissing(&'static str),
}

impl AreaError {
    /// Violations carried by a validation failure, empty otherwise.
    pub fn violations(&self) -> &[FieldError] {
        match self {
            AreaError::Validation(errors) => errors,
            _ => &[],
        }
    }

    /// True for failures the caller can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AreaError::ConfigurationMissing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_reports_count() {
        let err = AreaError::Validation(vec![
            FieldError::missing("hectares"),
            FieldError::missing("owner"),
        ]);
        assert!(err.to_string().contains("2 violation(s)"));
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_permission_denied_names_the_capability() {
        let err = AreaError::PermissionDenied(Capability::ApproveLegal);
        assert!(err.to_string().contains("approveLegal"));
    }

    #[test]
    fn test_stale_write_names_both_versions() {
        let err = AreaError::StaleWrite {
            observed: 3,
            current: 5,
        };
        let display = err.to_string();
        assert!(display.contains('3'));
        assert!(display.contains('5'));
    }
}
