//! Per-deployment toggles controlling which optional fields are mandatory.

use serde::{Deserialize, Serialize};

/// Toggles for the planting-area form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaFieldConfig {
    pub hectares: bool,
    pub owner: bool,
    pub location: bool,
    pub estimated_yield: bool,
}

/// Toggles for farming-activity records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FarmingFieldConfig {
    pub cost: bool,
    pub actual_area: bool,
    pub technician: bool,
}

/// Toggles for purchase records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PurchaseFieldConfig {
    pub quality: bool,
    pub price: bool,
}

/// The complete per-deployment validation policy. A flag set to `true` makes
/// the corresponding field mandatory on write; `false` leaves it optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub area: AreaFieldConfig,
    pub farming: FarmingFieldConfig,
    pub purchase: PurchaseFieldConfig,
}
