//! # Area Store
//!
//! Snapshot storage for area records behind a trait; the real deployment
//! backs this with a remote document store, tests and single-process use the
//! in-memory implementation.

use uuid::Uuid;

use super::errors::{AreaError, AreaResult};
use super::types::PlantingArea;

/// Abstracts storage of area records. Loads are full snapshots, no
/// incremental sync.
pub trait AreaStore: Send + Sync {
    /// The full current snapshot.
    fn load(&self) -> Vec<PlantingArea>;

    fn get(&self, id: Uuid) -> AreaResult<PlantingArea>;

    fn insert(&self, area: PlantingArea);

    /// Replaces the stored record. The target must exist.
    fn update(&self, area: PlantingArea) -> AreaResult<()>;

    /// Removes the record and everything it owns.
    fn remove(&self, id: Uuid) -> AreaResult<()>;
}

/// In-memory area store.
#[derive(Debug, Default)]
pub struct InMemoryAreaStore {
    areas: std::sync::RwLock<Vec<PlantingArea>>,
}

impl InMemoryAreaStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AreaStore for InMemoryAreaStore {
    fn load(&self) -> Vec<PlantingArea> {
        let areas = self.areas.read().unwrap_or_else(|e| e.into_inner());
        areas.clone()
    }

    fn get(&self, id: Uuid) -> AreaResult<PlantingArea> {
        let areas = self.areas.read().unwrap_or_else(|e| e.into_inner());
        areas
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AreaError::NotFound(id))
    }

    fn insert(&self, area: PlantingArea) {
        let mut areas = self.areas.write().unwrap_or_else(|e| e.into_inner());
        areas.push(area);
    }

    fn update(&self, area: PlantingArea) -> AreaResult<()> {
        let mut areas = self.areas.write().unwrap_or_else(|e| e.into_inner());
        match areas.iter_mut().find(|a| a.id == area.id) {
            Some(existing) => {
                *existing = area;
                Ok(())
            }
            None => Err(AreaError::NotFound(area.id)),
        }
    }

    fn remove(&self, id: Uuid) -> AreaResult<()> {
        let mut areas = self.areas.write().unwrap_or_else(|e| e.into_inner());
        let before = areas.len();
        areas.retain(|a| a.id != id);
        if areas.len() == before {
            Err(AreaError::NotFound(id))
        } else {
            Ok(())
        }
    }
}
