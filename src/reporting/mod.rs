//! # Reporting
//!
//! Read-side aggregation over area snapshots. Pure functions; no write path.

pub mod province;

pub use province::{aggregate_by_province, province_of, ProvinceSummary, UNSPECIFIED_PROVINCE};
