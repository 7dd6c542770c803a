//! # Validation
//!
//! Config-driven field validation. The deployment's [`FieldConfig`] decides
//! which optional fields are mandatory; validators always report the complete
//! set of violations in one pass.
//!
//! [`FieldConfig`]: crate::settings::FieldConfig

pub mod errors;
pub mod validator;

pub use errors::FieldError;
pub use validator::{
    validate_area, validate_farming, validate_purchase, FarmingDraft, PurchaseDraft,
};
