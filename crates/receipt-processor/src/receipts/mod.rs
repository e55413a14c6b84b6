//! Receipt processing pipeline.
//!
//! A raw JSON document is first reduced to a content-addressed [`ReceiptId`].
//! Unseen receipts are validated into a typed [`Receipt`], scored by the
//! [`ScoringEngine`], and recorded in a [`PointsRepository`]. Receipts whose
//! identifier is already recorded are returned as-is.

pub mod domain;
pub mod identity;
pub mod money;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId, ScoreRecord};
pub use identity::{canonical_json, receipt_id};
pub use money::{Money, MoneyError};
pub use repository::{InMemoryPointsRepository, PointsRepository, RepositoryError};
pub use router::receipt_router;
pub use scoring::{ScoreCard, ScoreComponent, ScoringConfig, ScoringEngine, ScoringRule};
pub use service::{ReceiptService, ReceiptServiceError};
pub use validation::{validate_receipt, ValidationError};
