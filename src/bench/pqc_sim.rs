//! Simulated Kyber KEM
//!
//! **This is not a lattice scheme.** No Module-LWE arithmetic happens here.
//! The benchmark reproduces the artifact sizes of Kyber-512 (NIST PQ level 1)
//! and times random generation of equivalently sized buffers as a rough proxy
//! for keygen / encapsulation / decapsulation cost.
//!
//! Two variants exist:
//!
//! - [`run`]: three OS-randomness draws (32, 768 and 32 bytes)
//! - [`run_hybrid`]: a 256-bit AEAD key, then seal and open a short message
//!   under ChaCha20-Poly1305, standing in for the symmetric half of a hybrid
//!   KEM + DEM construction
//!
//! Both report the same fixed sizes. A real post-quantum KEM can replace either
//! body without changing [`PqcMetrics`].

use super::record::{AlgorithmInfo, ByteSize, PqcMetrics};
use super::timing::timed;
use super::{BenchError, Result};
use chacha20poly1305::{
    aead::{Aead, AeadCore, KeyInit},
    ChaCha20Poly1305,
};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

/// Kyber-512 public key size in bytes
pub const PUBLIC_KEY_BYTES: usize = 800;

/// Kyber-512 ciphertext size in bytes
pub const CIPHERTEXT_BYTES: usize = 768;

/// Shared secret size in bytes
pub const SHARED_SECRET_BYTES: usize = 32;

/// Message sealed by the hybrid variant
pub const HYBRID_MESSAGE: &[u8] = b"PQC Benchmark";

/// Scheme description for the random-draw simulation
pub const INFO: AlgorithmInfo = AlgorithmInfo {
    algorithm: "CRYSTALS-Kyber (Simulated)",
    category: "Post-Quantum (Lattice-based, simulated)",
    security_level: "NIST PQ Level 1",
    quantum_resistant: true,
};

/// Scheme description for the AEAD hybrid simulation
pub const HYBRID_INFO: AlgorithmInfo = AlgorithmInfo {
    algorithm: "CRYSTALS-Kyber (Hybrid Sim)",
    category: "Post-Quantum (Lattice-based, hybrid simulation)",
    security_level: "NIST PQ Level 1",
    quantum_resistant: true,
};

fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf).map_err(BenchError::Entropy)
}

/// Run the random-draw simulation
///
/// # Errors
/// Fails only if the OS randomness source does.
pub fn run() -> Result<PqcMetrics> {
    let (mut secret, keygen_ms) = timed(|| {
        let mut secret = [0u8; SHARED_SECRET_BYTES];
        fill_random(&mut secret)?;
        Ok::<_, BenchError>(secret)
    })?;

    let (_ciphertext, encap_ms) = timed(|| {
        let mut ciphertext = vec![0u8; CIPHERTEXT_BYTES];
        fill_random(&mut ciphertext)?;
        Ok::<_, BenchError>(ciphertext)
    })?;

    let (mut recovered, decap_ms) = timed(|| {
        let mut recovered = [0u8; SHARED_SECRET_BYTES];
        fill_random(&mut recovered)?;
        Ok::<_, BenchError>(recovered)
    })?;

    secret.zeroize();
    recovered.zeroize();

    Ok(PqcMetrics {
        info: INFO,
        public_key: ByteSize(PUBLIC_KEY_BYTES),
        ciphertext: ByteSize(CIPHERTEXT_BYTES),
        shared_secret: ByteSize(SHARED_SECRET_BYTES),
        keygen_ms,
        encap_ms,
        decap_ms,
    })
}

/// Run the AEAD hybrid simulation
///
/// # Errors
/// Fails if randomness is unavailable, if sealing fails, or if the opened
/// plaintext differs from [`HYBRID_MESSAGE`].
pub fn run_hybrid() -> Result<PqcMetrics> {
    let (mut key, keygen_ms) = timed(|| {
        let mut key = [0u8; 32];
        fill_random(&mut key)?;
        Ok::<_, BenchError>(key)
    })?;

    let cipher = ChaCha20Poly1305::new((&key).into());
    key.zeroize();
    let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);

    let (sealed, encap_ms) = timed(|| {
        cipher
            .encrypt(&nonce, HYBRID_MESSAGE)
            .map_err(|e| BenchError::Aead(e.to_string()))
    })?;

    let (opened, decap_ms) = timed(|| {
        cipher
            .decrypt(&nonce, sealed.as_slice())
            .map_err(|e| BenchError::Aead(e.to_string()))
    })?;

    if opened != HYBRID_MESSAGE {
        return Err(BenchError::RoundTripMismatch);
    }

    Ok(PqcMetrics {
        info: HYBRID_INFO,
        public_key: ByteSize(PUBLIC_KEY_BYTES),
        ciphertext: ByteSize(CIPHERTEXT_BYTES),
        shared_secret: ByteSize(SHARED_SECRET_BYTES),
        keygen_ms,
        encap_ms,
        decap_ms,
    })
}
