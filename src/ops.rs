//! # Operations Service
//!
//! The surface the UI/API layer calls: permission resolution plus the area
//! mutations, wired to a store and the settings snapshot, with every decision
//! logged as a structured event.
//!
//! The service holds the session's settings snapshot; the caller refreshes it
//! through [`OpsService::replace_settings`] after an administrative update.

use uuid::Uuid;

use crate::area::{
    AreaDraft, AreaError, AreaLifecycle, AreaPatch, AreaResult, AreaStore, ApproachStatus,
    LegalStatus, PlantingArea,
};
use crate::observability::{Event, Logger};
use crate::permissions::{Capability, CapabilitySet, PermissionResolver};
use crate::reporting::{aggregate_by_province, ProvinceSummary};
use crate::settings::SystemSettings;
use crate::staff::Employee;

/// Session seam to the authentication collaborator. Credential verification
/// happens elsewhere; the core only asks who, if anyone, is present.
pub trait AuthSession: Send + Sync {
    fn current_principal(&self) -> Option<Employee>;
}

/// Ties resolver, lifecycle engine and store together for the calling layer.
pub struct OpsService<S: AreaStore> {
    settings: SystemSettings,
    resolver: PermissionResolver,
    store: S,
}

impl<S: AreaStore> OpsService<S> {
    pub fn new(settings: SystemSettings, store: S) -> Self {
        Logger::info(Event::SettingsLoaded.as_str(), &[]);
        Self {
            settings,
            resolver: PermissionResolver::new(),
            store,
        }
    }

    pub fn with_resolver(mut self, resolver: PermissionResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    /// Resolves the effective capability set for the current principal.
    pub fn resolve_permissions(&self, principal: Option<&Employee>) -> CapabilitySet {
        let caps = self
            .resolver
            .resolve(principal, Some(&self.settings.roles));
        Logger::trace(
            Event::PermissionsResolved.as_str(),
            &[(
                "principal",
                principal.map(|p| p.code.as_str()).unwrap_or("-"),
            )],
        );
        caps
    }

    /// Replaces the whole settings document. Requires ManageRoles, since the
    /// role catalog travels inside it.
    pub fn replace_settings(
        &mut self,
        next: SystemSettings,
        caps: &CapabilitySet,
    ) -> AreaResult<()> {
        if !caps.has(Capability::ManageRoles) {
            return Err(self.reject(AreaError::PermissionDenied(Capability::ManageRoles)));
        }
        self.settings.replace(next);
        Logger::info(Event::SettingsReplaced.as_str(), &[]);
        Ok(())
    }

    pub fn create_area(
        &self,
        draft: AreaDraft,
        caps: &CapabilitySet,
    ) -> AreaResult<PlantingArea> {
        let engine = AreaLifecycle::new(&self.settings);
        let area = engine.create(draft, caps).map_err(|e| self.reject(e))?;
        self.store.insert(area.clone());
        Logger::info(
            Event::AreaCreated.as_str(),
            &[("area", &area.code), ("id", &area.id.to_string())],
        );
        Ok(area)
    }

    pub fn update_area(
        &self,
        id: Uuid,
        patch: AreaPatch,
        observed_version: u64,
        caps: &CapabilitySet,
    ) -> AreaResult<PlantingArea> {
        let existing = self.store.get(id)?;
        let approved = patch.changes_legal_status_to(LegalStatus::Approved, &existing);

        let engine = AreaLifecycle::new(&self.settings);
        let updated = engine
            .update(&existing, patch, observed_version, caps)
            .map_err(|e| self.reject(e))?;
        self.store.update(updated.clone())?;

        let event = if approved {
            Event::LegalApproved
        } else {
            Event::AreaUpdated
        };
        Logger::info(
            event.as_str(),
            &[
                ("area", &updated.code),
                ("version", &updated.version.to_string()),
            ],
        );
        Ok(updated)
    }

    pub fn delete_area(
        &self,
        id: Uuid,
        observed_version: u64,
        caps: &CapabilitySet,
    ) -> AreaResult<()> {
        let existing = self.store.get(id)?;
        let engine = AreaLifecycle::new(&self.settings);
        engine
            .delete(&existing, observed_version, caps)
            .map_err(|e| self.reject(e))?;
        self.store.remove(id)?;
        Logger::info(Event::AreaDeleted.as_str(), &[("area", &existing.code)]);
        Ok(())
    }

    pub fn transition_approach(
        &self,
        id: Uuid,
        next: ApproachStatus,
        observed_version: u64,
        caps: &CapabilitySet,
    ) -> AreaResult<PlantingArea> {
        let existing = self.store.get(id)?;
        let engine = AreaLifecycle::new(&self.settings);
        let updated = engine
            .transition_approach(&existing, next, observed_version, caps)
            .map_err(|e| self.reject(e))?;
        self.store.update(updated.clone())?;
        Logger::info(
            Event::ApproachTransition.as_str(),
            &[("area", &updated.code)],
        );
        Ok(updated)
    }

    /// The full current area snapshot.
    pub fn areas(&self) -> Vec<PlantingArea> {
        self.store.load()
    }

    /// Per-province reporting buckets for the current snapshot.
    pub fn aggregate_by_province(&self, linked_label: &str) -> Vec<ProvinceSummary> {
        aggregate_by_province(&self.store.load(), linked_label)
    }

    fn reject(&self, error: AreaError) -> AreaError {
        let event = match &error {
            AreaError::PermissionDenied(_) => Event::PermissionDenied,
            AreaError::Validation(_) => Event::ValidationRejected,
            AreaError::StaleWrite { .. } => Event::StaleWriteRejected,
            _ => return error,
        };
        Logger::warn(event.as_str(), &[("reason", &error.to_string())]);
        error
    }
}
