//! Area Lifecycle Invariant Tests
//!
//! - Permission is checked before validation (AREA-L1)
//! - Legal approval is the only permission-gated transition (AREA-L2)
//! - Linkage labels must exist in the catalog at time of write (AREA-L3)
//! - Every mutation bumps the version; stale observers are rejected (AREA-L4)

use agrilink::area::{
    sort_by_priority, ApproachStatus, AreaDraft, AreaError, AreaLifecycle, AreaPatch, LegalStatus,
    PlantingArea, Priority,
};
use agrilink::permissions::{Capability, CapabilitySet};
use agrilink::settings::{AreaFieldConfig, FieldConfig, LinkageStatusCatalog, SystemSettings};

// =============================================================================
// Helper Functions
// =============================================================================

fn settings() -> SystemSettings {
    SystemSettings {
        linkage_statuses: LinkageStatusCatalog::standard(),
        field_config: FieldConfig {
            area: AreaFieldConfig {
                hectares: true,
                owner: true,
                location: false,
                estimated_yield: false,
            },
            ..FieldConfig::default()
        },
        ..SystemSettings::default()
    }
}

fn editor_caps() -> CapabilitySet {
    let mut caps = CapabilitySet::none();
    caps.set(Capability::CreateArea, true);
    caps.set(Capability::UpdateArea, true);
    caps.set(Capability::DeleteArea, true);
    caps
}

fn valid_draft(code: &str) -> AreaDraft {
    AreaDraft {
        code: code.to_string(),
        name: format!("Area {}", code),
        hectares: Some(5.5),
        owner: Some("Nguyen Van A".to_string()),
        ..AreaDraft::default()
    }
}

fn created(settings: &SystemSettings, code: &str) -> PlantingArea {
    AreaLifecycle::new(settings)
        .create(valid_draft(code), &editor_caps())
        .unwrap()
}

// =============================================================================
// Permission Before Validation
// =============================================================================

/// A caller without create-area gets a denial even for an invalid draft;
/// they must not learn whether it would have validated.
#[test]
fn test_denied_creator_learns_nothing_about_payload() {
    let settings = settings();
    let engine = AreaLifecycle::new(&settings);

    let result = engine.create(AreaDraft::default(), &CapabilitySet::minimal());
    assert_eq!(
        result,
        Err(AreaError::PermissionDenied(Capability::CreateArea))
    );
}

/// Same for updates: no update-area, no validation feedback.
#[test]
fn test_denied_updater_learns_nothing_about_payload() {
    let settings = settings();
    let engine = AreaLifecycle::new(&settings);
    let area = created(&settings, "VN-DL-001");

    let broken_patch = AreaPatch {
        hectares: Some(Some(-1.0)),
        ..AreaPatch::default()
    };
    let result = engine.update(&area, broken_patch, 0, &CapabilitySet::minimal());
    assert_eq!(
        result,
        Err(AreaError::PermissionDenied(Capability::UpdateArea))
    );
}

// =============================================================================
// Validation Completeness
// =============================================================================

/// An empty draft reports one error per mandatory field, not just the first.
#[test]
fn test_empty_draft_reports_all_violations() {
    let settings = settings();
    let engine = AreaLifecycle::new(&settings);

    match engine.create(AreaDraft::default(), &editor_caps()) {
        Err(AreaError::Validation(errors)) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, ["code", "name", "hectares", "owner"]);
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

// =============================================================================
// Legal Approval Gate
// =============================================================================

/// update-area alone moves the legal axis between Unprocessed and Submitted
/// but is rejected at Approved.
#[test]
fn test_approval_requires_approve_legal() {
    let settings = settings();
    let engine = AreaLifecycle::new(&settings);
    let area = created(&settings, "VN-DL-001");

    let submitted = engine
        .update(
            &area,
            AreaPatch::legal_status(LegalStatus::Submitted),
            0,
            &editor_caps(),
        )
        .unwrap();
    assert_eq!(submitted.legal_status, LegalStatus::Submitted);

    let back = engine
        .update(
            &submitted,
            AreaPatch::legal_status(LegalStatus::Unprocessed),
            1,
            &editor_caps(),
        )
        .unwrap();
    assert_eq!(back.legal_status, LegalStatus::Unprocessed);

    assert_eq!(
        engine.update(
            &back,
            AreaPatch::legal_status(LegalStatus::Approved),
            2,
            &editor_caps(),
        ),
        Err(AreaError::PermissionDenied(Capability::ApproveLegal))
    );
}

/// With approve-legal present the transition succeeds and the returned area
/// carries the new status.
#[test]
fn test_approval_succeeds_with_capability() {
    let settings = settings();
    let engine = AreaLifecycle::new(&settings);
    let area = created(&settings, "VN-DL-001");

    let mut approver = editor_caps();
    approver.set(Capability::ApproveLegal, true);

    let approved = engine
        .update(
            &area,
            AreaPatch::legal_status(LegalStatus::Approved),
            0,
            &approver,
        )
        .unwrap();
    assert_eq!(approved.legal_status, LegalStatus::Approved);
}

/// Re-asserting Approved on an already-approved record is not a transition
/// and needs only update-area.
#[test]
fn test_reasserting_approved_is_not_gated() {
    let settings = settings();
    let engine = AreaLifecycle::new(&settings);
    let area = created(&settings, "VN-DL-001");

    let mut approver = editor_caps();
    approver.set(Capability::ApproveLegal, true);
    let approved = engine
        .update(
            &area,
            AreaPatch::legal_status(LegalStatus::Approved),
            0,
            &approver,
        )
        .unwrap();

    let patch = AreaPatch {
        legal_status: Some(LegalStatus::Approved),
        comments: Some(Some("re-saved from the edit form".to_string())),
        ..AreaPatch::default()
    };
    assert!(engine.update(&approved, patch, 1, &editor_caps()).is_ok());
}

// =============================================================================
// Approach Axis
// =============================================================================

/// Outreach has no forward-only ordering: failure can be retried.
#[test]
fn test_approach_is_freely_reachable() {
    let settings = settings();
    let engine = AreaLifecycle::new(&settings);
    let caps = editor_caps();
    let mut area = created(&settings, "VN-DL-001");

    for (version, next) in [
        ApproachStatus::LinkFailed,
        ApproachStatus::Met,
        ApproachStatus::MemoSigned,
        ApproachStatus::NotMet,
    ]
    .into_iter()
    .enumerate()
    {
        area = engine
            .transition_approach(&area, next, version as u64, &caps)
            .unwrap();
        assert_eq!(area.approach_status, next);
    }
}

// =============================================================================
// Stale Writes
// =============================================================================

/// Two sessions editing the same record: the second writer's stale version
/// is rejected instead of silently winning.
#[test]
fn test_concurrent_editors_second_write_rejected() {
    let settings = settings();
    let engine = AreaLifecycle::new(&settings);
    let caps = editor_caps();
    let area = created(&settings, "VN-DL-001");

    // Session A commits first
    let committed = engine
        .update(&area, AreaPatch::priority(Priority::P1), 0, &caps)
        .unwrap();
    assert_eq!(committed.version, 1);

    // Session B still holds version 0
    assert_eq!(
        engine.update(&committed, AreaPatch::priority(Priority::P3), 0, &caps),
        Err(AreaError::StaleWrite {
            observed: 0,
            current: 1
        })
    );
}

// =============================================================================
// Priority Ordering
// =============================================================================

/// [P3, P1, Unranked, P2] sorts to [P1, P2, P3, Unranked]; the sort is
/// stable so equal ranks keep insertion order.
#[test]
fn test_priority_sort_order_and_stability() {
    let settings = settings();
    let engine = AreaLifecycle::new(&settings);
    let caps = editor_caps();

    let mut areas: Vec<PlantingArea> = [
        Priority::P3,
        Priority::P1,
        Priority::Unranked,
        Priority::P2,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, priority)| {
        let area = created(&settings, &format!("VN-{:02}", i));
        engine
            .update(&area, AreaPatch::priority(priority), 0, &caps)
            .unwrap()
    })
    .collect();

    sort_by_priority(&mut areas);

    let order: Vec<Priority> = areas.iter().map(|a| a.priority).collect();
    assert_eq!(
        order,
        [Priority::P1, Priority::P2, Priority::P3, Priority::Unranked]
    );

    // Stability: duplicate ranks keep their relative order
    let mut dupes: Vec<PlantingArea> = ["first", "second"]
        .into_iter()
        .map(|name| {
            let mut area = created(&settings, name);
            area = engine
                .update(&area, AreaPatch::priority(Priority::P2), 0, &caps)
                .unwrap();
            area
        })
        .collect();
    sort_by_priority(&mut dupes);
    assert_eq!(dupes[0].code, "first");
    assert_eq!(dupes[1].code, "second");
}

// =============================================================================
// Linkage Labels
// =============================================================================

/// New writes must use a catalog label; historical orphans stay readable.
#[test]
fn test_linkage_label_catalog_membership() {
    let settings = settings();
    let engine = AreaLifecycle::new(&settings);
    let caps = editor_caps();

    // Selectable label accepted
    let draft = AreaDraft {
        linkage_status: Some("AwaitingSignature".to_string()),
        ..valid_draft("VN-DL-001")
    };
    let area = engine.create(draft, &caps).unwrap();
    assert_eq!(area.linkage_status, "AwaitingSignature");

    // Unknown label rejected on write
    let patch = AreaPatch {
        linkage_status: Some("Handshake".to_string()),
        ..AreaPatch::default()
    };
    assert!(matches!(
        engine.update(&area, patch, 0, &caps),
        Err(AreaError::Validation(_))
    ));

    // An orphaned historical label survives unrelated edits
    let mut orphaned = area.clone();
    orphaned.linkage_status = "RetiredLabel".to_string();
    let kept = engine
        .update(&orphaned, AreaPatch::priority(Priority::P1), 0, &caps)
        .unwrap();
    assert_eq!(kept.linkage_status, "RetiredLabel");
}
