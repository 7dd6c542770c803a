//! # Planting Areas
//!
//! The workflow entity at the center of sourcing operations: four independent
//! status axes plus a priority ranking, with permission-gated transitions.

pub mod errors;
pub mod lifecycle;
pub mod store;
pub mod types;

pub use errors::{AreaError, AreaResult};
pub use lifecycle::{sort_by_priority, AreaLifecycle};
pub use store::{AreaStore, InMemoryAreaStore};
pub use types::{
    ApproachStatus, AreaDraft, AreaPatch, Farmer, LegalStatus, OperationalStatus, PlantingArea,
    Priority,
};
