//! agrilink - decision core for a farm-sourcing operations system
//!
//! Permission resolution, planting-area lifecycle, config-driven validation,
//! and province-level reporting. Storage and transport live behind traits.

pub mod area;
pub mod observability;
pub mod ops;
pub mod permissions;
pub mod reporting;
pub mod settings;
pub mod staff;
pub mod validation;
