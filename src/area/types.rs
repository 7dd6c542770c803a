//! Planting-area records and their status vocabulary.
//!
//! A planting area carries four independent status axes plus a priority
//! ranking. The axes never constrain one another; each is mutated by its own
//! update path in the lifecycle engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current field activity, independent of partnership status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationalStatus {
    Active,
    Harvesting,
    Fallow,
    PendingApproval,
}

/// Outreach progress with the grower. `MemoSigned` and `LinkFailed` are
/// terminal for the outreach sub-process; the record itself stays editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApproachStatus {
    NotMet,
    Met,
    MemoSigned,
    LinkFailed,
}

/// Legal paperwork progress. Forward-only in normal operation; moving to
/// `Approved` is the one permission-gated transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegalStatus {
    Unprocessed,
    Submitted,
    Approved,
}

/// Sourcing priority. A ranking, not a lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
    Unranked,
}

impl Priority {
    /// Sort rank: P1 < P2 < P3 < Unranked.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::P1 => 1,
            Priority::P2 => 2,
            Priority::P3 => 3,
            Priority::Unranked => 4,
        }
    }
}

/// A grower participating in an area. Owned by the area record and removed
/// with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farmer {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The planting-area workflow entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantingArea {
    pub id: Uuid,

    /// Short unique region code, e.g. "VN-DL-001"
    pub code: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hectares: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_yield: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    pub operational_status: OperationalStatus,

    /// Free-text label from the linkage catalog. Orphaned labels are kept on
    /// historical records but are not selectable for new writes.
    pub linkage_status: String,

    pub approach_status: ApproachStatus,
    pub legal_status: LegalStatus,
    pub priority: Priority,

    #[serde(default)]
    pub farmers: Vec<Farmer>,
    /// Names of attached documents; storage itself is external
    #[serde(default)]
    pub documents: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_note: Option<String>,
    #[serde(default)]
    pub appointment_participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_date: Option<NaiveDate>,

    /// Monotonic write counter. Mutations require the caller's last-observed
    /// value and reject mismatches, replacing the old last-write-wins.
    pub version: u64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The payload submitted to create a new area. Status axes are not part of
/// the draft; they start at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaDraft {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub crop_type: Option<String>,
    #[serde(default)]
    pub hectares: Option<f64>,
    #[serde(default)]
    pub estimated_yield: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub farmers: Vec<Farmer>,
    /// When unset, the first linkage catalog entry is used
    #[serde(default)]
    pub linkage_status: Option<String>,
}

/// A partial update. `None` leaves the existing value untouched; the
/// double-`Option` fields distinguish "leave" from "clear".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub crop_type: Option<Option<String>>,
    pub hectares: Option<Option<f64>>,
    pub estimated_yield: Option<Option<f64>>,
    pub location: Option<Option<String>>,
    pub owner: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub comments: Option<Option<String>>,
    pub farmers: Option<Vec<Farmer>>,
    pub operational_status: Option<OperationalStatus>,
    pub linkage_status: Option<String>,
    pub legal_status: Option<LegalStatus>,
    pub priority: Option<Priority>,
    pub appointment_date: Option<Option<NaiveDate>>,
    pub appointment_note: Option<Option<String>>,
    pub appointment_participants: Option<Vec<String>>,
    pub authorization_date: Option<Option<NaiveDate>>,
}

impl AreaPatch {
    /// A patch that only re-ranks the area.
    pub fn priority(priority: Priority) -> Self {
        Self {
            priority: Some(priority),
            ..Self::default()
        }
    }

    /// A patch that only moves the legal axis.
    pub fn legal_status(status: LegalStatus) -> Self {
        Self {
            legal_status: Some(status),
            ..Self::default()
        }
    }

    /// Whether the patch moves `legal_status` to a value it was not already at.
    pub fn changes_legal_status_to(&self, target: LegalStatus, existing: &PlantingArea) -> bool {
        self.legal_status == Some(target) && existing.legal_status != target
    }
}
