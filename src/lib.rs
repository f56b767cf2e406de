//! Voxfor Key-Exchange Metrics
//!
//! Copyright (c) 2025 Netanel Siboni (voxfor.com). All rights reserved.
//!
//! Side-by-side performance and security figures for three key-establishment
//! primitives, served to a browser dashboard.
//!
//! # Algorithms
//!
//! - **Kyber (simulated)**: post-quantum KEM artifact sizes with random-draw timings
//! - **RSA-2048**: OAEP-SHA256 encryption and decryption
//! - **X25519**: elliptic-curve Diffie-Hellman
//!
//! # HTTP
//!
//! | Route | Response |
//! |---|---|
//! | `GET /` | landing page |
//! | `GET /static/*` | dashboard assets |
//! | `GET /metrics/pqc` | [`bench::PqcMetrics`] |
//! | `GET /metrics/pqc/hybrid` | [`bench::PqcMetrics`] (AEAD hybrid simulation) |
//! | `GET /metrics/rsa` | [`bench::RsaMetrics`] |
//! | `GET /metrics/ecdh` | [`bench::EcdhMetrics`] |
//! | `GET /metrics` | [`bench::MetricsReport`] |
//! | `GET /health` | liveness |
//!
//! # Example
//!
//! ```rust,no_run
//! use voxfor_kex_metrics::bench::ecdh;
//!
//! let metrics = ecdh::run().unwrap();
//! println!("X25519 exchange took {}", metrics.exchange_ms);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bench;
pub mod server;

pub mod error;

pub use error::Error;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
