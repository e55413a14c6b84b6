use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::receipts::domain::{ReceiptId, ScoreRecord};
use crate::receipts::repository::{PointsRepository, RepositoryError};
use crate::receipts::{receipt_router, ReceiptService};

pub(super) fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
        ],
        "total": "35.35"
    })
}

pub(super) fn single_item_receipt() -> Value {
    json!({
        "retailer": "T",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "15:00",
        "items": [
            { "shortDescription": "Emils Cheese Pizz", "price": "12.25" }
        ],
        "total": "35.00"
    })
}

/// Copy of `receipt` with `field` replaced by `value`.
pub(super) fn with_field(mut receipt: Value, field: &str, value: Value) -> Value {
    receipt[field] = value;
    receipt
}

/// Copy of `receipt` with `field` removed.
pub(super) fn without_field(mut receipt: Value, field: &str) -> Value {
    if let Some(fields) = receipt.as_object_mut() {
        fields.remove(field);
    }
    receipt
}

/// Repository counting writes so tests can observe when scoring happened.
#[derive(Default)]
pub(super) struct CountingRepository {
    records: Mutex<HashMap<ReceiptId, u64>>,
    inserts: AtomicUsize,
}

impl CountingRepository {
    pub(super) fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub(super) fn seed(&self, id: ReceiptId, points: u64) {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .insert(id, points);
    }
}

impl PointsRepository for CountingRepository {
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).map(|points| ScoreRecord {
            id: id.clone(),
            points: *points,
        }))
    }

    fn insert_if_absent(&self, record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let points = *guard.entry(record.id.clone()).or_insert(record.points);
        Ok(ScoreRecord {
            id: record.id,
            points,
        })
    }
}

pub(super) struct UnavailableRepository;

impl PointsRepository for UnavailableRepository {
    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn insert_if_absent(&self, _record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<ReceiptService<CountingRepository>>, Arc<CountingRepository>) {
    let repository = Arc::new(CountingRepository::default());
    let service = Arc::new(ReceiptService::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(service: Arc<ReceiptService<CountingRepository>>) -> axum::Router {
    receipt_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
