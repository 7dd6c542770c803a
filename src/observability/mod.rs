//! # Observability
//!
//! Structured JSON logging and typed decision events.

pub mod events;
pub mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
