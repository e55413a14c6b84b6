use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::receipts::router::{points_handler, process_handler, INVALID_RECEIPT, UNKNOWN_RECEIPT};
use crate::receipts::ReceiptService;

fn post_receipt(body: &Value) -> Request<Body> {
    Request::post("/receipts/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serializable")))
        .expect("request builds")
}

#[tokio::test]
async fn process_route_returns_identifier() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_receipt(&target_receipt()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload.get("id").and_then(Value::as_str).is_some());
}

#[tokio::test]
async fn process_then_points_round_trip() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(post_receipt(&target_receipt()))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    let id = payload["id"].as_str().expect("id returned").to_string();

    let response = router
        .oneshot(
            Request::get(format!("/receipts/{id}/points"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await, json!({ "points": 28 }));
}

#[tokio::test]
async fn process_handler_rejects_invalid_receipt() {
    let (service, repository) = build_service();

    let response = process_handler::<CountingRepository>(
        State(service),
        axum::Json(with_field(target_receipt(), "total", json!("35.355"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json_body(response).await,
        json!({ "error": INVALID_RECEIPT })
    );
    assert_eq!(repository.inserts(), 0);
}

#[tokio::test]
async fn process_handler_rejects_non_object_payloads() {
    let (service, _) = build_service();

    let response =
        process_handler::<CountingRepository>(State(service), axum::Json(json!([1, 2, 3]))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn points_handler_returns_not_found_for_unknown_id() {
    let (service, _) = build_service();

    let response = points_handler::<CountingRepository>(
        State(service),
        Path("2c37898a-dc27-56ac-b9d4-cb755b426579".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json_body(response).await,
        json!({ "error": UNKNOWN_RECEIPT })
    );
}

#[tokio::test]
async fn handlers_return_internal_error_on_repository_failure() {
    let service = Arc::new(ReceiptService::new(Arc::new(UnavailableRepository)));

    let response = process_handler::<UnavailableRepository>(
        State(service.clone()),
        axum::Json(target_receipt()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response =
        points_handler::<UnavailableRepository>(State(service), Path("any".to_string())).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn wrong_methods_are_rejected() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/receipts/process")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/receipts/2c37898a-dc27-56ac-b9d4-cb755b426579/points")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
