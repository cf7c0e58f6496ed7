//! Integration tests driving the assembled router against an in-memory store.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use clinic_api::{common_routes, connect, ensure_tables, record_routes, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

// One connection so every request sees the same in-memory database.
async fn test_app() -> Router {
    let pool = connect("sqlite::memory:", 1).await.unwrap();
    ensure_tables(&pool).await.unwrap();
    let state = AppState { pool };
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(record_routes(state))
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn create_patient_returns_persisted_row_and_list_includes_it() {
    let app = test_app().await;

    let (status, created) =
        request(&app, "POST", "/patients", Some(json!({"name": "Alice", "age": 30}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["age"], 30);
    assert!(created["id"].as_i64().unwrap() >= 1);

    let (status, listed) = request(&app, "GET", "/patients", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = listed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], created);
}

#[tokio::test]
async fn sequential_patient_creates_yield_strictly_increasing_ids() {
    let app = test_app().await;

    let (_, first) =
        request(&app, "POST", "/patients", Some(json!({"name": "Alice", "age": 30}))).await;
    let (_, second) =
        request(&app, "POST", "/patients", Some(json!({"name": "Bob", "age": 41}))).await;
    assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());
}

#[tokio::test]
async fn update_overwrites_both_fields() {
    let app = test_app().await;

    let (_, created) =
        request(&app, "POST", "/patients", Some(json!({"name": "Alice", "age": 30}))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/patients/{}", id),
        Some(json!({"name": "Alicia", "age": 31})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Alicia");
    assert_eq!(updated["age"], 31);
}

#[tokio::test]
async fn update_missing_patient_returns_fixed_not_found_message() {
    let app = test_app().await;

    let (status, body) = request(
        &app,
        "PUT",
        "/patients/9999",
        Some(json!({"name": "Nobody", "age": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Patient not found");
}

#[tokio::test]
async fn delete_patient_confirms_and_removes_row() {
    let app = test_app().await;

    let (_, created) =
        request(&app, "POST", "/patients", Some(json!({"name": "Alice", "age": 30}))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = request(&app, "DELETE", &format!("/patients/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Patient deleted");

    let (_, listed) = request(&app, "GET", "/patients", None).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_patient_returns_not_found() {
    let app = test_app().await;

    let (status, body) = request(&app, "DELETE", "/patients/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Patient not found");
}

#[tokio::test]
async fn appointment_create_accepts_dangling_patient_reference() {
    let app = test_app().await;

    let (status, created) = request(
        &app,
        "POST",
        "/appointments",
        Some(json!({"date": "2026-01-15", "patient_id": 424242})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["date"], "2026-01-15");
    assert_eq!(created["patient_id"], 424242);

    let (status, listed) = request(&app, "GET", "/appointments", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = listed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], created);
}

#[tokio::test]
async fn deleting_patient_leaves_appointments_in_place() {
    let app = test_app().await;

    let (_, patient) =
        request(&app, "POST", "/patients", Some(json!({"name": "Alice", "age": 30}))).await;
    let id = patient["id"].as_i64().unwrap();
    request(
        &app,
        "POST",
        "/appointments",
        Some(json!({"date": "2026-02-01", "patient_id": id})),
    )
    .await;

    let (status, _) = request(&app, "DELETE", &format!("/patients/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = request(&app, "GET", "/appointments", None).await;
    let rows = listed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["patient_id"], id);
}

#[tokio::test]
async fn mistyped_body_is_rejected_by_the_framework() {
    let app = test_app().await;

    let (status, _) = request(
        &app,
        "POST",
        "/patients",
        Some(json!({"name": "Alice", "age": "thirty"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, listed) = request(&app, "GET", "/patients", None).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn health_and_ready_report_ok() {
    let app = test_app().await;

    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = request(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}
