use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use super::domain::{ReceiptId, ScoreRecord};
use super::identity::receipt_id;
use super::repository::{PointsRepository, RepositoryError};
use super::scoring::ScoringEngine;
use super::validation::{validate_receipt, ValidationError};

/// Service composing identity derivation, validation, scoring, and storage.
pub struct ReceiptService<R> {
    repository: Arc<R>,
    engine: ScoringEngine,
}

impl<R> ReceiptService<R>
where
    R: PointsRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_engine(repository, ScoringEngine::default())
    }

    pub fn with_engine(repository: Arc<R>, engine: ScoringEngine) -> Self {
        Self { repository, engine }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Score a raw receipt document and return its identifier.
    ///
    /// A document whose identifier is already recorded is returned without
    /// being validated or scored again, even if it would now fail validation.
    pub fn process(&self, raw: &Value) -> Result<ReceiptId, ReceiptServiceError> {
        let id = receipt_id(raw);

        if self.repository.fetch(&id)?.is_some() {
            info!(receipt_id = %id, "duplicate receipt submitted, returning recorded id");
            return Ok(id);
        }

        let receipt = validate_receipt(raw).inspect_err(|reason| {
            debug!(receipt_id = %id, %reason, "receipt rejected");
        })?;

        let card = self.engine.score(&receipt);
        for component in &card.components {
            debug!(
                receipt_id = %id,
                rule = component.rule.label(),
                points = component.points,
                notes = %component.notes,
                "score component"
            );
        }

        let stored = self.repository.insert_if_absent(ScoreRecord {
            id: id.clone(),
            points: card.total,
        })?;
        info!(receipt_id = %stored.id, points = stored.points, "receipt stored");

        Ok(stored.id)
    }

    /// Points previously recorded for `id`.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or_else(|| ReceiptServiceError::NotFound(id.clone()))?;
        Ok(record.points)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no receipt found for id {0}")]
    NotFound(ReceiptId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
