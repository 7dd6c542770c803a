//! Config-driven record validation.
//!
//! Which optional fields are mandatory varies by deployment; the rules
//! themselves do not. Numeric fields must be positive (estimated yield may be
//! zero), string fields must be non-empty after trimming. `code` and `name`
//! are required regardless of configuration.
//!
//! Every validator makes a complete pass and returns one [`FieldError`] per
//! violation. A fully empty record yields one error per mandatory field.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::area::types::AreaDraft;
use crate::settings::{AreaFieldConfig, FarmingFieldConfig, PurchaseFieldConfig};

use super::errors::FieldError;

fn require_text(errors: &mut Vec<FieldError>, field: &str, value: Option<&str>) {
    match value {
        None => errors.push(FieldError::missing(field)),
        Some(s) if s.trim().is_empty() => errors.push(FieldError::empty(field)),
        Some(_) => {}
    }
}

fn require_positive(errors: &mut Vec<FieldError>, field: &str, value: Option<f64>) {
    match value {
        None => errors.push(FieldError::missing(field)),
        Some(v) if v <= 0.0 => errors.push(FieldError::not_positive(field, v)),
        Some(_) => {}
    }
}

fn require_non_negative(errors: &mut Vec<FieldError>, field: &str, value: Option<f64>) {
    match value {
        None => errors.push(FieldError::missing(field)),
        Some(v) if v < 0.0 => errors.push(FieldError::negative(field, v)),
        Some(_) => {}
    }
}

/// Validates an area draft or merged update against the deployment's policy.
pub fn validate_area(draft: &AreaDraft, config: &AreaFieldConfig) -> Vec<FieldError> {
    let mut errors = Vec::new();

    // Unconditional fields
    require_text(&mut errors, "code", Some(draft.code.as_str()));
    require_text(&mut errors, "name", Some(draft.name.as_str()));

    if config.hectares {
        require_positive(&mut errors, "hectares", draft.hectares);
    }
    if config.owner {
        require_text(&mut errors, "owner", draft.owner.as_deref());
    }
    if config.location {
        require_text(&mut errors, "location", draft.location.as_deref());
    }
    if config.estimated_yield {
        // Zero is a legitimate surveyed yield
        require_non_negative(&mut errors, "estimatedYield", draft.estimated_yield);
    }

    errors
}

/// A farming-activity write request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FarmingDraft {
    pub area_id: Option<Uuid>,
    pub activity_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technician: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub actual_area: Option<f64>,
}

/// Validates a farming-activity record.
pub fn validate_farming(draft: &FarmingDraft, config: &FarmingFieldConfig) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.area_id.is_none() {
        errors.push(FieldError::missing("areaId"));
    }
    require_text(&mut errors, "activityType", draft.activity_type.as_deref());

    if config.cost {
        require_positive(&mut errors, "cost", draft.cost);
    }
    if config.actual_area {
        require_positive(&mut errors, "actualArea", draft.actual_area);
    }
    if config.technician {
        require_text(&mut errors, "technician", draft.technician.as_deref());
    }

    errors
}

/// A purchase write request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDraft {
    pub area_id: Option<Uuid>,
    pub quantity_kg: Option<f64>,
    #[serde(default)]
    pub price_per_kg: Option<f64>,
    #[serde(default)]
    pub quality: Option<String>,
}

/// Validates a purchase record.
pub fn validate_purchase(draft: &PurchaseDraft, config: &PurchaseFieldConfig) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.area_id.is_none() {
        errors.push(FieldError::missing("areaId"));
    }
    require_positive(&mut errors, "quantityKg", draft.quantity_kg);

    if config.quality {
        require_text(&mut errors, "quality", draft.quality.as_deref());
    }
    if config.price {
        require_positive(&mut errors, "pricePerKg", draft.price_per_kg);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict_area_config() -> AreaFieldConfig {
        AreaFieldConfig {
            hectares: true,
            owner: true,
            location: true,
            estimated_yield: true,
        }
    }

    #[test]
    fn test_empty_draft_reports_every_mandatory_field() {
        let errors = validate_area(&AreaDraft::default(), &strict_area_config());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["code", "name", "hectares", "owner", "location", "estimatedYield"]
        );
    }

    #[test]
    fn test_unconfigured_fields_are_optional() {
        let draft = AreaDraft {
            code: "VN-DL-001".to_string(),
            name: "Dai Loc".to_string(),
            ..AreaDraft::default()
        };
        assert!(validate_area(&draft, &AreaFieldConfig::default()).is_empty());
    }

    #[test]
    fn test_whitespace_only_strings_rejected() {
        let draft = AreaDraft {
            code: "  ".to_string(),
            name: "Dai Loc".to_string(),
            owner: Some("\t".to_string()),
            ..AreaDraft::default()
        };
        let config = AreaFieldConfig {
            owner: true,
            ..AreaFieldConfig::default()
        };
        let errors = validate_area(&draft, &config);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["code", "owner"]);
    }

    #[test]
    fn test_zero_hectares_rejected_zero_yield_allowed() {
        let draft = AreaDraft {
            code: "VN-DL-001".to_string(),
            name: "Dai Loc".to_string(),
            hectares: Some(0.0),
            estimated_yield: Some(0.0),
            owner: Some("Nguyen Van A".to_string()),
            location: Some("Lam Dong".to_string()),
            ..AreaDraft::default()
        };
        let errors = validate_area(&draft, &strict_area_config());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["hectares"]);
    }

    #[test]
    fn test_farming_flags_gate_their_fields() {
        let draft = FarmingDraft {
            area_id: Some(Uuid::new_v4()),
            activity_type: Some("Fertilizing".to_string()),
            ..FarmingDraft::default()
        };

        assert!(validate_farming(&draft, &FarmingFieldConfig::default()).is_empty());

        let config = FarmingFieldConfig {
            technician: true,
            cost: true,
            actual_area: false,
        };
        let errors = validate_farming(&draft, &config);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["cost", "technician"]);
    }

    #[test]
    fn test_purchase_quantity_always_required() {
        let draft = PurchaseDraft {
            area_id: Some(Uuid::new_v4()),
            quantity_kg: Some(-5.0),
            ..PurchaseDraft::default()
        };
        let errors = validate_purchase(&draft, &PurchaseFieldConfig::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "quantityKg");
    }

    #[test]
    fn test_purchase_flags_gate_quality_and_price() {
        let draft = PurchaseDraft {
            area_id: Some(Uuid::new_v4()),
            quantity_kg: Some(500.0),
            ..PurchaseDraft::default()
        };
        let config = PurchaseFieldConfig {
            quality: true,
            price: true,
        };
        let errors = validate_purchase(&draft, &config);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["quality", "pricePerKg"]);
    }
}
