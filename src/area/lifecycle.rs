//! # Area Lifecycle Engine
//!
//! Guards and applies every planting-area mutation. Checks run in a fixed
//! order: capability, then version precondition, then field validation, then
//! linkage-label catalog membership. A caller without the capability never
//! learns whether their payload would have validated.
//!
//! ## Invariants
//! - AREA-L1: Permission is checked before any validation or mutation
//! - AREA-L2: Moving `legal_status` to Approved additionally requires the
//!   ApproveLegal capability; no other transition is permission-gated
//! - AREA-L3: A linkage label newly written must exist in the current
//!   catalog; an unchanged historical label is tolerated
//! - AREA-L4: Every successful mutation bumps `version` by exactly one

use chrono::Utc;
use uuid::Uuid;

use crate::permissions::{Capability, CapabilitySet};
use crate::settings::SystemSettings;
use crate::validation::{validate_area, FieldError};

use super::errors::{AreaError, AreaResult};
use super::types::{
    ApproachStatus, AreaDraft, AreaPatch, LegalStatus, OperationalStatus, PlantingArea, Priority,
};

/// The lifecycle engine, borrowing the session's settings snapshot.
pub struct AreaLifecycle<'a> {
    settings: &'a SystemSettings,
}

impl<'a> AreaLifecycle<'a> {
    pub fn new(settings: &'a SystemSettings) -> Self {
        Self { settings }
    }

    fn require(caps: &CapabilitySet, cap: Capability) -> AreaResult<()> {
        if caps.has(cap) {
            Ok(())
        } else {
            Err(AreaError::PermissionDenied(cap))
        }
    }

    fn check_version(existing: &PlantingArea, observed: u64) -> AreaResult<()> {
        if existing.version == observed {
            Ok(())
        } else {
            Err(AreaError::StaleWrite {
                observed,
                current: existing.version,
            })
        }
    }

    /// Creates a new area from a draft.
    ///
    /// Requires CreateArea. Status axes start at their defaults: Active,
    /// NotMet, Unprocessed, Unranked; the linkage label defaults to the first
    /// catalog entry when the draft leaves it unset.
    pub fn create(&self, draft: AreaDraft, caps: &CapabilitySet) -> AreaResult<PlantingArea> {
        Self::require(caps, Capability::CreateArea)?;

        let mut errors = validate_area(&draft, &self.settings.field_config.area);

        let catalog = &self.settings.linkage_statuses;
        let linkage_status = match draft.linkage_status.as_deref() {
            Some(label) => {
                if !catalog.contains(label) {
                    errors.push(FieldError::unknown_label("linkageStatus", label));
                }
                label.to_string()
            }
            None => match catalog.default_label() {
                Some(label) => label.to_string(),
                None => return Err(AreaError::ConfigurationMissing("linkage status catalog")),
            },
        };

        if !errors.is_empty() {
            return Err(AreaError::Validation(errors));
        }

        let now = Utc::now();
        Ok(PlantingArea {
            id: Uuid::new_v4(),
            code: draft.code,
            name: draft.name,
            crop_type: draft.crop_type,
            hectares: draft.hectares,
            estimated_yield: draft.estimated_yield,
            location: draft.location,
            owner: draft.owner,
            phone: draft.phone,
            comments: draft.comments,
            operational_status: OperationalStatus::Active,
            linkage_status,
            approach_status: ApproachStatus::NotMet,
            legal_status: LegalStatus::Unprocessed,
            priority: Priority::Unranked,
            farmers: draft.farmers,
            documents: Vec::new(),
            appointment_date: None,
            appointment_note: None,
            appointment_participants: Vec::new(),
            authorization_date: None,
            version: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a patch to an existing area and returns the updated record.
    ///
    /// Requires UpdateArea. Moving `legal_status` to Approved from any other
    /// value additionally requires ApproveLegal; a caller with only
    /// UpdateArea can still move it between Unprocessed and Submitted.
    pub fn update(
        &self,
        existing: &PlantingArea,
        patch: AreaPatch,
        observed_version: u64,
        caps: &CapabilitySet,
    ) -> AreaResult<PlantingArea> {
        Self::require(caps, Capability::UpdateArea)?;
        if patch.changes_legal_status_to(LegalStatus::Approved, existing) {
            Self::require(caps, Capability::ApproveLegal)?;
        }
        Self::check_version(existing, observed_version)?;

        let merged = Self::merge(existing, patch);

        let mut errors = validate_area(&Self::draft_of(&merged), &self.settings.field_config.area);

        // A label the patch actually changed must be in the catalog; an
        // untouched or re-asserted historical label stays valid for display.
        if merged.linkage_status != existing.linkage_status
            && !self.settings.linkage_statuses.contains(&merged.linkage_status)
        {
            errors.push(FieldError::unknown_label(
                "linkageStatus",
                merged.linkage_status.clone(),
            ));
        }

        if !errors.is_empty() {
            return Err(AreaError::Validation(errors));
        }

        Ok(merged)
    }

    /// Authorizes deletion of an area. Unconditional once authorized; the
    /// owned farmer sub-records live inside the record and go with it.
    pub fn delete(
        &self,
        existing: &PlantingArea,
        observed_version: u64,
        caps: &CapabilitySet,
    ) -> AreaResult<()> {
        Self::require(caps, Capability::DeleteArea)?;
        Self::check_version(existing, observed_version)?;
        Ok(())
    }

    /// Moves the outreach axis. No ordering is enforced: outreach can be
    /// retried after a recorded failure, so LinkFailed and every other state
    /// are mutually reachable.
    pub fn transition_approach(
        &self,
        existing: &PlantingArea,
        next: ApproachStatus,
        observed_version: u64,
        caps: &CapabilitySet,
    ) -> AreaResult<PlantingArea> {
        Self::require(caps, Capability::UpdateArea)?;
        Self::check_version(existing, observed_version)?;

        let mut updated = existing.clone();
        updated.approach_status = next;
        updated.version = existing.version + 1;
        updated.updated_at = Utc::now();
        Ok(updated)
    }

    fn merge(existing: &PlantingArea, patch: AreaPatch) -> PlantingArea {
        let mut merged = existing.clone();
        if let Some(code) = patch.code {
            merged.code = code;
        }
        if let Some(name) = patch.name {
            merged.name = name;
        }
        if let Some(crop_type) = patch.crop_type {
            merged.crop_type = crop_type;
        }
        if let Some(hectares) = patch.hectares {
            merged.hectares = hectares;
        }
        if let Some(estimated_yield) = patch.estimated_yield {
            merged.estimated_yield = estimated_yield;
        }
        if let Some(location) = patch.location {
            merged.location = location;
        }
        if let Some(owner) = patch.owner {
            merged.owner = owner;
        }
        if let Some(phone) = patch.phone {
            merged.phone = phone;
        }
        if let Some(comments) = patch.comments {
            merged.comments = comments;
        }
        if let Some(farmers) = patch.farmers {
            merged.farmers = farmers;
        }
        if let Some(operational_status) = patch.operational_status {
            merged.operational_status = operational_status;
        }
        if let Some(linkage_status) = patch.linkage_status {
            merged.linkage_status = linkage_status;
        }
        if let Some(legal_status) = patch.legal_status {
            merged.legal_status = legal_status;
        }
        if let Some(priority) = patch.priority {
            merged.priority = priority;
        }
        if let Some(appointment_date) = patch.appointment_date {
            merged.appointment_date = appointment_date;
        }
        if let Some(appointment_note) = patch.appointment_note {
            merged.appointment_note = appointment_note;
        }
        if let Some(participants) = patch.appointment_participants {
            merged.appointment_participants = participants;
        }
        if let Some(authorization_date) = patch.authorization_date {
            merged.authorization_date = authorization_date;
        }
        merged.version = existing.version + 1;
        merged.updated_at = Utc::now();
        merged
    }

    fn draft_of(area: &PlantingArea) -> AreaDraft {
        AreaDraft {
            code: area.code.clone(),
            name: area.name.clone(),
            crop_type: area.crop_type.clone(),
            hectares: area.hectares,
            estimated_yield: area.estimated_yield,
            location: area.location.clone(),
            owner: area.owner.clone(),
            phone: area.phone.clone(),
            comments: area.comments.clone(),
            farmers: area.farmers.clone(),
            linkage_status: Some(area.linkage_status.clone()),
        }
    }
}

/// Stable priority ordering for listing and export: P1 < P2 < P3 < Unranked,
/// ties kept in insertion order. UI and export parity depends on this exact
/// ordering.
pub fn sort_by_priority(areas: &mut [PlantingArea]) {
    areas.sort_by_key(|a| a.priority.rank());
}
