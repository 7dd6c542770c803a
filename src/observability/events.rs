//! Typed decision events.
//!
//! Every observable decision the core makes has a named event, so the
//! surrounding layer can log or audit without string-matching.

use std::fmt;

/// Observable events in the decision core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Session & configuration
    /// Settings snapshot loaded
    SettingsLoaded,
    /// Settings snapshot replaced by administrative update
    SettingsReplaced,
    /// Capability set resolved for a principal
    PermissionsResolved,
    /// Resolution fell through to the superuser override
    SuperuserOverride,

    // Area lifecycle
    AreaCreated,
    AreaUpdated,
    AreaDeleted,
    /// Outreach axis moved
    ApproachTransition,
    /// Legal axis moved to Approved
    LegalApproved,

    // Rejections
    /// A mutation was denied for a missing capability
    PermissionDenied,
    /// A mutation failed field validation
    ValidationRejected,
    /// A mutation carried a stale version token
    StaleWriteRejected,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SettingsLoaded => "SETTINGS_LOADED",
            Event::SettingsReplaced => "SETTINGS_REPLACED",
            Event::PermissionsResolved => "PERMISSIONS_RESOLVED",
            Event::SuperuserOverride => "SUPERUSER_OVERRIDE",
            Event::AreaCreated => "AREA_CREATED",
            Event::AreaUpdated => "AREA_UPDATED",
            Event::AreaDeleted => "AREA_DELETED",
            Event::ApproachTransition => "APPROACH_TRANSITION",
            Event::LegalApproved => "LEGAL_APPROVED",
            Event::PermissionDenied => "PERMISSION_DENIED",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::StaleWriteRejected => "STALE_WRITE_REJECTED",
        }
    }

    /// True for events worth a WARN line: someone asked for something the
    /// core refused.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Event::PermissionDenied | Event::ValidationRejected | Event::StaleWriteRejected
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
