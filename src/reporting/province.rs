//! Province-level reporting over area snapshots.
//!
//! Pure function of the area collection; no write path. The province key is
//! the last comma-separated segment of the free-text location. Each area
//! lands in exactly one of linked/pending/failed.

use serde::{Deserialize, Serialize};

use crate::area::{ApproachStatus, PlantingArea};

/// Bucket for areas whose location does not name a province.
pub const UNSPECIFIED_PROVINCE: &str = "Unspecified";

/// Counts and hectare sum for one province.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceSummary {
    pub province: String,
    pub total: u64,
    pub linked: u64,
    pub pending: u64,
    pub failed: u64,
    pub hectares: f64,
}

impl ProvinceSummary {
    fn new(province: String) -> Self {
        Self {
            province,
            total: 0,
            linked: 0,
            pending: 0,
            failed: 0,
            hectares: 0.0,
        }
    }
}

/// Derives the province key from a free-text location.
pub fn province_of(location: Option<&str>) -> &str {
    location
        .and_then(|loc| loc.split(',').next_back())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(UNSPECIFIED_PROVINCE)
}

/// Aggregates areas into per-province reporting buckets.
///
/// Classification, first match wins:
/// 1. linkage label equals `linked_label` (the configured fully-linked
///    label) -> linked
/// 2. approach status is LinkFailed -> failed
/// 3. otherwise -> pending
///
/// Output is sorted by total descending, ties by province name ascending,
/// for reporting consistency.
pub fn aggregate_by_province(areas: &[PlantingArea], linked_label: &str) -> Vec<ProvinceSummary> {
    let mut summaries: Vec<ProvinceSummary> = Vec::new();

    for area in areas {
        let province = province_of(area.location.as_deref());
        let idx = match summaries.iter().position(|s| s.province == province) {
            Some(i) => i,
            None => {
                summaries.push(ProvinceSummary::new(province.to_string()));
                summaries.len() - 1
            }
        };
        let summary = &mut summaries[idx];

        summary.total += 1;
        summary.hectares += area.hectares.unwrap_or(0.0);

        if area.linkage_status == linked_label {
            summary.linked += 1;
        } else if area.approach_status == ApproachStatus::LinkFailed {
            summary.failed += 1;
        } else {
            summary.pending += 1;
        }
    }

    summaries.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.province.cmp(&b.province))
    });
    summaries
}
