//! Error types for the library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Benchmark error: {0}")]
    Bench(#[from] crate::bench::BenchError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
