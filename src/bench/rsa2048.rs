//! RSA-2048 benchmark
//!
//! Generates a fresh 2048-bit key pair, encrypts [`PLAINTEXT`] once under the
//! public key and decrypts it once under the private key.
//!
//! # Padding
//!
//! RSAES-OAEP with SHA-256 for both the label hash and MGF1. PKCS#1 v1.5
//! would produce a ciphertext of the same length (the modulus length) with
//! slightly lower encryption cost; OAEP is used because it is the scheme a new
//! deployment should pick.
//!
//! # Latency
//!
//! Key generation dominates and is non-deterministic: prime search is
//! probabilistic, so individual runs can differ by an order of magnitude.

use super::record::{AlgorithmInfo, ByteSize, RsaMetrics};
use super::timing::timed;
use super::{BenchError, Result};
use rand::rngs::OsRng;
use rsa::pkcs8::EncodePublicKey;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

/// Modulus size in bits
pub const KEY_BITS: usize = 2048;

/// Fixed message encrypted by the benchmark
pub const PLAINTEXT: &[u8] = b"RSA Benchmark";

/// Scheme description
pub const INFO: AlgorithmInfo = AlgorithmInfo {
    algorithm: "RSA-2048",
    category: "Classical (Integer factorization)",
    security_level: "Classical ~128-bit",
    quantum_resistant: false,
};

/// Encrypt `plaintext` under `public_key` with OAEP-SHA256
pub fn encrypt(public_key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    public_key
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|e| BenchError::Encryption(e.to_string()))
}

/// Decrypt an OAEP-SHA256 ciphertext
pub fn decrypt(private_key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    private_key
        .decrypt(Oaep::new::<Sha256>(), ciphertext)
        .map_err(|e| BenchError::Decryption(e.to_string()))
}

/// Run the benchmark
///
/// # Errors
/// Any failure of key generation, SPKI encoding, encryption or decryption,
/// or a decrypted plaintext that differs from [`PLAINTEXT`].
pub fn run() -> Result<RsaMetrics> {
    let ((private_key, public_key), keygen_ms) = timed(|| {
        let private_key = RsaPrivateKey::new(&mut OsRng, KEY_BITS)
            .map_err(|e| BenchError::KeyGeneration(e.to_string()))?;
        let public_key = RsaPublicKey::from(&private_key);
        Ok::<_, BenchError>((private_key, public_key))
    })?;

    let public_der = public_key
        .to_public_key_der()
        .map_err(|e| BenchError::Encoding(e.to_string()))?;

    let (ciphertext, encrypt_ms) = timed(|| encrypt(&public_key, PLAINTEXT))?;
    let (recovered, decrypt_ms) = timed(|| decrypt(&private_key, &ciphertext))?;

    if recovered != PLAINTEXT {
        return Err(BenchError::RoundTripMismatch);
    }

    Ok(RsaMetrics {
        info: INFO,
        public_key: ByteSize(public_der.as_bytes().len()),
        ciphertext: ByteSize(ciphertext.len()),
        keygen_ms,
        encrypt_ms,
        decrypt_ms,
    })
}
