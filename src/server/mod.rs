//! HTTP surface for the benchmark dashboard
//!
//! A thin axum router: one route per benchmark, the landing page at `/` and
//! static assets under `/static`. No state is shared between requests.

pub mod handlers;

use crate::Error;
use axum::routing::get;
use axum::Router;
use log::info;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub bind_addr: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Landing page served at `/`
    pub index_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
            index_file: PathBuf::from("static/index.html"),
        }
    }
}

impl ServerConfig {
    /// Socket address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Check that the asset paths exist before binding
    pub fn validate(&self) -> Result<(), Error> {
        if !self.static_dir.is_dir() {
            return Err(Error::Config(format!(
                "static directory not found: {}",
                self.static_dir.display()
            )));
        }
        if !self.index_file.is_file() {
            return Err(Error::Config(format!(
                "index page not found: {}",
                self.index_file.display()
            )));
        }
        Ok(())
    }
}

/// Build the application router
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(&config.index_file))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .route("/metrics", get(handlers::metrics_report))
        .route("/metrics/pqc", get(handlers::pqc_metrics))
        .route("/metrics/pqc/hybrid", get(handlers::pqc_hybrid_metrics))
        .route("/metrics/rsa", get(handlers::rsa_metrics))
        .route("/metrics/ecdh", get(handlers::ecdh_metrics))
        .route("/health", get(handlers::health))
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: ServerConfig) -> Result<(), Error> {
    config.validate()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Starting metrics server...");
    info!("  Listening on: http://{}", listener.local_addr()?);
    info!("  Static dir: {}", config.static_dir.display());
    info!("  Index page: {}", config.index_file.display());

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Metrics server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
