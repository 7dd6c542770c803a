//! # Permission Resolver
//!
//! Computes the effective capability set for a principal against the role
//! catalog. A priority-ordered chain, first match wins; absence of
//! information always degrades to the least-privileged applicable branch,
//! never to an error.
//!
//! ## Invariants
//! - PERM-R1: Missing session or missing catalog resolves to the all-false set
//! - PERM-R2: A non-Active principal resolves to the all-false set regardless
//!   of role
//! - PERM-R3: A role found by exact name resolves to that role's stored
//!   capability set verbatim (missing stored flags are already false, see
//!   PERM-C2)
//! - PERM-R4: The superuser rule only fires when no role matched by name

use crate::staff::Employee;

use super::capability::CapabilitySet;
use super::role::RoleCatalog;

/// The hard-coded superuser escape hatch, made explicit.
///
/// A deployment can recover administrative access through a well-known login
/// code or role name even when the catalog is misconfigured or the
/// administrator role was deleted. Enabled by default to preserve observed
/// behavior; construct with `enabled: false` to close the hatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperuserRule {
    pub enabled: bool,
    /// Login code granted the full set, e.g. "ADMIN"
    pub code: String,
    /// Role name granted the full set, e.g. "Administrator"
    pub role_name: String,
}

impl Default for SuperuserRule {
    fn default() -> Self {
        Self {
            enabled: true,
            code: "ADMIN".to_string(),
            role_name: "Administrator".to_string(),
        }
    }
}

impl SuperuserRule {
    fn matches(&self, principal: &Employee) -> bool {
        self.enabled && (principal.code == self.code || principal.role == self.role_name)
    }
}

/// Resolves capability sets. Stateless apart from the superuser rule.
#[derive(Debug, Clone, Default)]
pub struct PermissionResolver {
    superuser: SuperuserRule,
}

impl PermissionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_superuser_rule(superuser: SuperuserRule) -> Self {
        Self { superuser }
    }

    /// Resolves the effective capability set.
    ///
    /// Chain, evaluated top-down:
    /// 1. no principal or no catalog -> all false
    /// 2. principal not Active -> all false
    /// 3. exact role-name match -> that role's stored set
    /// 4. superuser rule -> all true
    /// 5. otherwise -> dashboard only
    pub fn resolve(
        &self,
        principal: Option<&Employee>,
        catalog: Option<&RoleCatalog>,
    ) -> CapabilitySet {
        let (principal, catalog) = match (principal, catalog) {
            (Some(p), Some(c)) => (p, c),
            _ => return CapabilitySet::none(),
        };

        if !principal.is_active() {
            return CapabilitySet::none();
        }

        if let Some(role) = catalog.find_by_name(&principal.role) {
            return role.capabilities.clone();
        }

        if self.superuser.matches(principal) {
            return CapabilitySet::all();
        }

        CapabilitySet::minimal()
    }
}
