//! HTTP API for the biometrics patient registry.
//!
//! Thin axum layer over [`biometrics_core::PatientRegistry`]: handlers
//! deserialize the body, call the registry and wrap the outcome in a
//! `success` envelope.

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;

use std::future::Future;
use std::io;

use anyhow::Context;
use biometrics_core::PatientRegistry;
use tokio::net::TcpListener;
use tokio::signal;

/// Open the database named in `config` and serve until Ctrl+C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let registry = PatientRegistry::open(&config.database_path)
        .with_context(|| format!("failed to open database {:?}", config.database_path))?;
    tracing::info!(database = ?config.database_path, "database ready");

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind TCP listener")?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router(registry).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_shutdown(signal::ctrl_c()).await
}

/// Resolve once `signal` fires. If the handler could not be installed the
/// error is logged and this never resolves, so the server keeps running.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("shutdown requested"),
        Err(err) => {
            tracing::error!(%err, "failed to install Ctrl+C handler, graceful shutdown disabled");
            std::future::pending::<()>().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_on_signal() {
        let signal = async { io::Result::Ok(()) };
        let done = tokio::time::timeout(Duration::from_millis(100), wait_for_shutdown(signal)).await;
        assert!(done.is_ok());
    }

    #[tokio::test]
    async fn test_failed_signal_handler_keeps_serving() {
        logging::init_test();
        let failed = async { io::Result::<()>::Err(io::Error::other("no signal support")) };
        let done = tokio::time::timeout(Duration::from_millis(50), wait_for_shutdown(failed)).await;
        assert!(done.is_err());
    }
}
