use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

use super::domain::ReceiptId;
use super::repository::PointsRepository;
use super::service::{ReceiptService, ReceiptServiceError};

pub(crate) const INVALID_RECEIPT: &str = "The receipt is invalid";
pub(crate) const UNKNOWN_RECEIPT: &str = "No receipt found for that id";

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Router builder exposing receipt submission and point lookup.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: PointsRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:receipt_id/points", get(points_handler::<R>))
        .with_state(service)
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Json(receipt): Json<Value>,
) -> Response
where
    R: PointsRepository + 'static,
{
    match service.process(&receipt) {
        Ok(id) => (StatusCode::OK, Json(ProcessResponse { id })).into_response(),
        Err(ReceiptServiceError::Validation(_)) => {
            error_response(StatusCode::BAD_REQUEST, INVALID_RECEIPT)
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: PointsRepository + 'static,
{
    match service.points(&ReceiptId(receipt_id)) {
        Ok(points) => (StatusCode::OK, Json(PointsResponse { points })).into_response(),
        Err(ReceiptServiceError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, UNKNOWN_RECEIPT)
        }
        Err(other) => internal_error(other),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn internal_error(err: ReceiptServiceError) -> Response {
    error!(error = %err, "receipt request failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
}
