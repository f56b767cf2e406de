//! End-to-end tests for the HTTP routes
//!
//! Requests go straight into the router through `tower::ServiceExt::oneshot`,
//! so no socket is opened.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use futures::future::join_all;
use http_body_util::BodyExt;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;
use voxfor_kex_metrics::server::{router, ServerConfig};

const INDEX_HTML: &str = "<!DOCTYPE html><html><body>dashboard</body></html>";
const APP_JS: &str = "console.log('metrics');";

/// Router over a throwaway asset directory
fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let static_dir = dir.path().join("static");
    fs::create_dir(&static_dir).unwrap();
    fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    fs::write(static_dir.join("app.js"), APP_JS).unwrap();

    let config = ServerConfig {
        static_dir,
        index_file: dir.path().join("index.html"),
        ..ServerConfig::default()
    };
    config.validate().unwrap();
    (router(&config), dir)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> Map<String, Value> {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "GET {} failed", uri);
    let value: Value = serde_json::from_slice(&body).unwrap();
    value.as_object().cloned().unwrap()
}

fn keys(record: &Map<String, Value>) -> BTreeSet<&str> {
    record.keys().map(String::as_str).collect()
}

fn assert_timings_non_negative(record: &Map<String, Value>, fields: &[&str]) {
    for field in fields {
        let ms = record[*field].as_f64().unwrap_or_else(|| panic!("{} is not a number", field));
        assert!(ms >= 0.0, "{} is negative: {}", field, ms);
    }
}

#[tokio::test]
async fn test_pqc_record_fields() {
    let (app, _dir) = test_app();
    let record = get_json(app, "/metrics/pqc").await;

    let expected: BTreeSet<&str> = [
        "algorithm", "category", "security_level", "quantum_resistant",
        "public_key", "ciphertext", "shared_secret",
        "keygen_ms", "encap_ms", "decap_ms",
    ]
    .into_iter()
    .collect();
    assert_eq!(keys(&record), expected);

    assert_eq!(record["quantum_resistant"], true);
    assert_eq!(record["public_key"], "800 bytes");
    assert_eq!(record["ciphertext"], "768 bytes");
    assert_eq!(record["shared_secret"], "32 bytes");
    assert_timings_non_negative(&record, &["keygen_ms", "encap_ms", "decap_ms"]);
}

#[tokio::test]
async fn test_pqc_hybrid_record() {
    let (app, _dir) = test_app();
    let record = get_json(app, "/metrics/pqc/hybrid").await;

    assert_eq!(record["algorithm"], "CRYSTALS-Kyber (Hybrid Sim)");
    assert_eq!(record["public_key"], "800 bytes");
    assert_timings_non_negative(&record, &["keygen_ms", "encap_ms", "decap_ms"]);
}

#[tokio::test]
async fn test_rsa_record_fields() {
    let (app, _dir) = test_app();
    let record = get_json(app, "/metrics/rsa").await;

    let expected: BTreeSet<&str> = [
        "algorithm", "category", "security_level", "quantum_resistant",
        "public_key", "ciphertext",
        "keygen_ms", "encrypt_ms", "decrypt_ms",
    ]
    .into_iter()
    .collect();
    assert_eq!(keys(&record), expected);

    assert_eq!(record["algorithm"], "RSA-2048");
    assert_eq!(record["quantum_resistant"], false);
    assert_eq!(record["public_key"], "294 bytes");
    assert_eq!(record["ciphertext"], "256 bytes");
    assert_timings_non_negative(&record, &["keygen_ms", "encrypt_ms", "decrypt_ms"]);
}

#[tokio::test]
async fn test_ecdh_end_to_end() {
    let (app, _dir) = test_app();
    let record = get_json(app, "/metrics/ecdh").await;

    let expected: BTreeSet<&str> = [
        "algorithm", "category", "security_level", "quantum_resistant",
        "public_key", "shared_secret",
        "keygen_ms", "exchange_ms",
    ]
    .into_iter()
    .collect();
    assert_eq!(keys(&record), expected);

    assert_eq!(record["public_key"], "32 bytes");
    assert_eq!(record["shared_secret"], "32 bytes");
    assert_timings_non_negative(&record, &["keygen_ms", "exchange_ms"]);
}

#[tokio::test]
async fn test_metrics_report() {
    let (app, _dir) = test_app();
    let report = get_json(app, "/metrics").await;

    assert!(report["generated_at"].is_string());
    assert_eq!(report["pqc"]["ciphertext"], "768 bytes");
    assert_eq!(report["rsa"]["algorithm"], "RSA-2048");
    assert_eq!(report["ecdh"]["public_key"], "32 bytes");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_are_independent() {
    let (app, _dir) = test_app();

    let requests = (0..16).map(|_| get_json(app.clone(), "/metrics/ecdh"));
    let records = join_all(requests).await;

    assert_eq!(records.len(), 16);
    for record in &records {
        assert_eq!(record.len(), 8);
        assert_eq!(record["algorithm"], "X25519 (ECDH)");
        assert_eq!(record["shared_secret"], "32 bytes");
        assert_timings_non_negative(record, &["keygen_ms", "exchange_ms"]);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_pqc_requests() {
    let (app, _dir) = test_app();

    let requests = (0..32).map(|_| get_json(app.clone(), "/metrics/pqc"));
    for record in join_all(requests).await {
        assert_eq!(record["public_key"], "800 bytes");
        assert_eq!(record["ciphertext"], "768 bytes");
        assert_eq!(record["shared_secret"], "32 bytes");
    }
}

#[tokio::test]
async fn test_landing_page() {
    let (app, _dir) = test_app();
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), INDEX_HTML);
}

#[tokio::test]
async fn test_static_asset() {
    let (app, _dir) = test_app();
    let (status, body) = get(app, "/static/app.js").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), APP_JS);
}

#[tokio::test]
async fn test_missing_static_asset() {
    let (app, _dir) = test_app();
    let (status, _) = get(app, "/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let (app, _dir) = test_app();
    let health = get_json(app, "/health").await;

    assert_eq!(health["status"], "ok");
    assert_eq!(health["version"], voxfor_kex_metrics::VERSION);
}
