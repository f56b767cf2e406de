//! Key-establishment benchmarks
//!
//! Three independent, stateless operations, one per algorithm family:
//!
//! - [`pqc_sim::run`]: simulated Kyber KEM (random-byte stand-in)
//! - [`rsa2048::run`]: RSA-2048 with OAEP-SHA256
//! - [`ecdh::run`]: X25519 Diffie-Hellman
//!
//! Each call generates fresh key material, times every phase with a monotonic
//! clock and returns a record. Nothing is cached or shared between calls, so
//! any number of them may run concurrently.

pub mod timing;
pub mod record;
pub mod pqc_sim;
pub mod rsa2048;
pub mod ecdh;

use chrono::Utc;
use thiserror::Error;

pub use record::{AlgorithmInfo, ByteSize, EcdhMetrics, MetricsReport, PqcMetrics, RsaMetrics};
pub use timing::{timed, Millis};

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("OS randomness unavailable: {0}")]
    Entropy(rand::Error),

    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed: {0}")]
    Decryption(String),

    #[error("Key encoding failed: {0}")]
    Encoding(String),

    #[error("AEAD operation failed: {0}")]
    Aead(String),

    #[error("Decrypted plaintext does not match the original")]
    RoundTripMismatch,

    #[error("Key agreement produced different secrets for the two parties")]
    SharedSecretMismatch,
}

pub type Result<T> = std::result::Result<T, BenchError>;

/// Run the three core benchmarks back to back
pub fn run_all() -> Result<MetricsReport> {
    let pqc = pqc_sim::run()?;
    let rsa = rsa2048::run()?;
    let ecdh = ecdh::run()?;

    Ok(MetricsReport {
        generated_at: Utc::now(),
        pqc,
        rsa,
        ecdh,
    })
}
