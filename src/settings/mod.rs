//! # System Settings
//!
//! Process-wide configuration: the role catalog, the linkage status catalog,
//! and the field-validation policy. Loaded once per session from the storage
//! collaborator and replaced atomically on administrative update.

pub mod field_config;
pub mod linkage;

pub use field_config::{AreaFieldConfig, FarmingFieldConfig, FieldConfig, PurchaseFieldConfig};
pub use linkage::{LinkageStatusCatalog, LinkageStatusOption};

use serde::{Deserialize, Serialize};

use crate::permissions::RoleCatalog;

/// The complete settings document.
///
/// Every field must survive a save/reload cycle unchanged; configuration is
/// storage-agnostic and round-trips through JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemSettings {
    pub roles: RoleCatalog,
    pub linkage_statuses: LinkageStatusCatalog,
    pub field_config: FieldConfig,
}

impl SystemSettings {
    /// Atomically replaces the whole settings document.
    pub fn replace(&mut self, next: SystemSettings) {
        *self = next;
    }
}

/// Storage collaborator seam: full-snapshot loads, no incremental sync.
pub trait SettingsStore: Send + Sync {
    fn load(&self) -> Option<SystemSettings>;
    fn save(&self, settings: &SystemSettings);
}
