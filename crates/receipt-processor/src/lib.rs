//! Receipt intake, scoring, and point lookup.
//!
//! The [`receipts`] module holds the processing pipeline: validation of raw
//! receipt documents, the fixed loyalty-point rules, content-addressed
//! identifiers, and the record store backing point lookups. The remaining
//! modules carry process concerns shared with the HTTP service.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
