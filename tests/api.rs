//! Router-level tests. The pool is lazy and never touched by the routes
//! exercised here, so no live MySQL is needed.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use vocacional::{config::Config, database::init_pool, state::AppState};

fn app() -> axum::Router {
    let config = Config::load();
    let pool = init_pool(&config);

    vocacional::app(Arc::new(AppState { config, pool }))
}

async fn get(path: &str) -> (StatusCode, Vec<u8>) {
    let response = app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, body.to_vec())
}

#[tokio::test]
async fn test_root_acknowledges() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"API Vocacional funcionando");
}

#[tokio::test]
async fn test_match_riasec_missing_code() {
    let (status, body) = get("/match_riasec").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Código RIASEC inválido");
}

#[tokio::test]
async fn test_match_riasec_empty_code() {
    let (status, body) = get("/match_riasec?code=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_match_unknown_dimension() {
    let (status, body) = get("/match/x").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Dimensión RIASEC inválida");
}

#[tokio::test]
async fn test_match_multi_letter_dimension() {
    let (status, _) = get("/match/RI").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _) = get("/carreras").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id() {
    let (status, _) = get("/provincias/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
