//! # Linkage Status Catalog
//!
//! Linkage status is a free-text label drawn from a configurable catalog, not
//! a closed enum. Labels in the catalog are selectable for new writes; labels
//! orphaned by catalog edits remain valid on historical records for display
//! but may not be written again.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A configurable linkage label, e.g. "Signed" or "AwaitingSignature".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkageStatusOption {
    pub id: Uuid,

    /// The label stored on area records
    pub label: String,

    /// Display hint for the UI layer, carried opaquely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl LinkageStatusOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            color: None,
        }
    }
}

/// The current set of selectable linkage labels, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkageStatusCatalog {
    options: Vec<LinkageStatusOption>,
}

impl LinkageStatusCatalog {
    pub fn new(options: Vec<LinkageStatusOption>) -> Self {
        Self { options }
    }

    /// The recommended minimum lifecycle vocabulary.
    pub fn standard() -> Self {
        Self::new(vec![
            LinkageStatusOption::new("NotLinked"),
            LinkageStatusOption::new("AwaitingSignature"),
            LinkageStatusOption::new("Signed"),
            LinkageStatusOption::new("Expired"),
        ])
    }

    /// Whether a label is currently selectable for new writes.
    pub fn contains(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label == label)
    }

    /// The default label for newly created areas: the first catalog entry.
    pub fn default_label(&self) -> Option<&str> {
        self.options.first().map(|o| o.label.as_str())
    }

    pub fn add(&mut self, option: LinkageStatusOption) {
        self.options.push(option);
    }

    /// Returns true if an option was removed. Historical records keep the
    /// orphaned label.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.options.len();
        self.options.retain(|o| o.id != id);
        self.options.len() != before
    }

    pub fn options(&self) -> &[LinkageStatusOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
