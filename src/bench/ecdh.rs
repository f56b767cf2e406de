//! X25519 ECDH benchmark
//!
//! A local party and a simulated peer each generate an ephemeral key pair
//! (timed together as keygen). Both sides then run the Diffie-Hellman
//! function against the other's public key (timed together as exchange) and
//! the two secrets must agree.

use super::record::{AlgorithmInfo, ByteSize, EcdhMetrics};
use super::timing::timed;
use super::{BenchError, Result};
use rand::rngs::OsRng;
use subtle::ConstantTimeEq;
use x25519_dalek::{EphemeralSecret, PublicKey, SharedSecret};

/// X25519 public key size in bytes (curve property)
pub const PUBLIC_KEY_BYTES: usize = 32;

/// Scheme description
pub const INFO: AlgorithmInfo = AlgorithmInfo {
    algorithm: "X25519 (ECDH)",
    category: "Classical (Elliptic curve)",
    security_level: "Classical ~128-bit",
    quantum_resistant: false,
};

struct Party {
    secret: EphemeralSecret,
    public: PublicKey,
}

impl Party {
    fn generate() -> Self {
        let secret = EphemeralSecret::random_from_rng(OsRng);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }
}

/// Constant-time comparison of two derived secrets
pub fn secrets_match(a: &SharedSecret, b: &SharedSecret) -> bool {
    bool::from(a.as_bytes().as_slice().ct_eq(b.as_bytes().as_slice()))
}

/// Run the benchmark
///
/// # Errors
/// Returns [`BenchError::SharedSecretMismatch`] if the two parties derive
/// different secrets.
pub fn run() -> Result<EcdhMetrics> {
    let ((local, peer), keygen_ms) =
        timed(|| Ok::<_, BenchError>((Party::generate(), Party::generate())))?;

    let local_public = local.public;
    let peer_public = peer.public;

    // Each secret is consumed by its single exchange.
    let ((ours, theirs), exchange_ms) = timed(|| {
        let ours = local.secret.diffie_hellman(&peer_public);
        let theirs = peer.secret.diffie_hellman(&local_public);
        Ok::<_, BenchError>((ours, theirs))
    })?;

    if !secrets_match(&ours, &theirs) {
        return Err(BenchError::SharedSecretMismatch);
    }

    Ok(EcdhMetrics {
        info: INFO,
        public_key: ByteSize(PUBLIC_KEY_BYTES),
        shared_secret: ByteSize(ours.as_bytes().len()),
        keygen_ms,
        exchange_ms,
    })
}
