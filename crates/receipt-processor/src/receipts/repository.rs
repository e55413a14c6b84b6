use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::domain::{ReceiptId, ScoreRecord};

/// Storage abstraction for scored receipts so the service can be exercised in isolation.
pub trait PointsRepository: Send + Sync {
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError>;

    /// Store `record` unless its id is already present.
    ///
    /// Returns whichever record is canonical for the id afterwards, so a
    /// losing concurrent writer observes the first writer's points.
    fn insert_if_absent(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-lifetime store guarded by a single lock.
#[derive(Debug, Default)]
pub struct InMemoryPointsRepository {
    records: Mutex<HashMap<ReceiptId, u64>>,
}

impl InMemoryPointsRepository {
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<ReceiptId, u64>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("points store mutex poisoned".to_string()))
    }
}

impl PointsRepository for InMemoryPointsRepository {
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).map(|points| ScoreRecord {
            id: id.clone(),
            points: *points,
        }))
    }

    fn insert_if_absent(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        let mut guard = self.lock()?;
        let points = *guard.entry(record.id.clone()).or_insert(record.points);
        Ok(ScoreRecord {
            id: record.id,
            points,
        })
    }
}
