//! # Roles and the Role Catalog
//!
//! Roles are runtime-mutable configuration, not code. The catalog is loaded
//! once per session and only replaced wholesale through a settings update.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::capability::CapabilitySet;

/// A named bundle of capabilities.
///
/// Principals reference roles by `name` (a value reference that can dangle);
/// `id` exists so configuration tooling can rename a role without rewriting
/// every principal, but resolution still goes through the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Stable identifier, independent of display name
    pub id: Uuid,

    /// Unique name within a catalog; the value principals reference
    pub name: String,

    /// Capability flags; omitted flags deserialize as false
    #[serde(default)]
    pub capabilities: CapabilitySet,
}

impl Role {
    /// Create a role with a fresh id.
    pub fn new(name: impl Into<String>, capabilities: CapabilitySet) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            capabilities,
        }
    }
}

/// Ordered collection of roles, replaced atomically on administrative update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleCatalog {
    roles: Vec<Role>,
}

impl RoleCatalog {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    /// Exact, case-sensitive name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.name == name)
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// Replaces the whole catalog. There is no per-role mutation; callers
    /// submit the complete new configuration.
    pub fn replace(&mut self, roles: Vec<Role>) {
        self.roles = roles;
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
