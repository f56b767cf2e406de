//! Benchmark result records
//!
//! One record type per algorithm family. Records are built once at the end of
//! a benchmark run and never mutated afterwards; all fields are public so the
//! HTTP layer and tests can inspect them, but nothing holds on to a record
//! past the response that carries it.

use super::timing::Millis;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Size of a key, ciphertext or secret in bytes
///
/// Serializes as `"<n> bytes"`, which is how the dashboard displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteSize(pub usize);

impl ByteSize {
    /// Number of bytes
    pub fn bytes(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}

impl Serialize for ByteSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Static description of a scheme, shared by every record family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    /// Human-readable scheme name
    pub algorithm: &'static str,
    /// Classical vs. post-quantum, plus the mathematical basis
    pub category: &'static str,
    /// Nominal security strength
    pub security_level: &'static str,
    /// Believed safe against a quantum adversary
    pub quantum_resistant: bool,
}

/// Simulated Kyber KEM result
///
/// Sizes are constants of the simulation, not measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PqcMetrics {
    #[serde(flatten)]
    pub info: AlgorithmInfo,
    pub public_key: ByteSize,
    pub ciphertext: ByteSize,
    pub shared_secret: ByteSize,
    pub keygen_ms: Millis,
    pub encap_ms: Millis,
    pub decap_ms: Millis,
}

/// RSA-2048 encryption result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsaMetrics {
    #[serde(flatten)]
    pub info: AlgorithmInfo,
    /// DER-encoded SubjectPublicKeyInfo length
    pub public_key: ByteSize,
    pub ciphertext: ByteSize,
    pub keygen_ms: Millis,
    pub encrypt_ms: Millis,
    pub decrypt_ms: Millis,
}

/// X25519 key agreement result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcdhMetrics {
    #[serde(flatten)]
    pub info: AlgorithmInfo,
    pub public_key: ByteSize,
    pub shared_secret: ByteSize,
    /// Both parties' key pairs
    pub keygen_ms: Millis,
    pub exchange_ms: Millis,
}

/// All three core benchmarks, run back to back
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub generated_at: DateTime<Utc>,
    pub pqc: PqcMetrics,
    pub rsa: RsaMetrics,
    pub ecdh: EcdhMetrics,
}
