//! Route handlers
//!
//! Each metrics handler runs one benchmark on the blocking pool and returns
//! its record as JSON. Handlers accept no input.

use crate::bench::{self, ecdh, pqc_sim, rsa2048, EcdhMetrics, MetricsReport, PqcMetrics, RsaMetrics};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{debug, error};
use serde_json::json;
use thiserror::Error;

/// Failure of a metrics request
///
/// Every variant maps to HTTP 500 with a body of `{"error": "<message>"}`
/// and no benchmark data.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Benchmark(#[from] bench::BenchError),

    #[error("Benchmark task failed: {0}")]
    TaskJoin(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Metrics request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// Run a benchmark off the async reactor
///
/// RSA key generation can take hundreds of milliseconds, so every benchmark
/// goes through `spawn_blocking` rather than stalling a worker thread.
async fn run_blocking<T, F>(name: &'static str, benchmark: F) -> Result<Json<T>, ApiError>
where
    F: FnOnce() -> bench::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let record = tokio::task::spawn_blocking(benchmark)
        .await
        .map_err(|e| ApiError::TaskJoin(e.to_string()))??;
    debug!("{} benchmark completed", name);
    Ok(Json(record))
}

/// `GET /metrics/pqc`
pub async fn pqc_metrics() -> Result<Json<PqcMetrics>, ApiError> {
    run_blocking("pqc", pqc_sim::run).await
}

/// `GET /metrics/pqc/hybrid`
pub async fn pqc_hybrid_metrics() -> Result<Json<PqcMetrics>, ApiError> {
    run_blocking("pqc-hybrid", pqc_sim::run_hybrid).await
}

/// `GET /metrics/rsa`
pub async fn rsa_metrics() -> Result<Json<RsaMetrics>, ApiError> {
    run_blocking("rsa", rsa2048::run).await
}

/// `GET /metrics/ecdh`
pub async fn ecdh_metrics() -> Result<Json<EcdhMetrics>, ApiError> {
    run_blocking("ecdh", ecdh::run).await
}

/// `GET /metrics`
pub async fn metrics_report() -> Result<Json<MetricsReport>, ApiError> {
    run_blocking("all", bench::run_all).await
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}
