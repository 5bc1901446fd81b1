//! Graceful shutdown with a bounded grace period.
//!
//! On SIGINT/SIGTERM the listener stops accepting connections and in-flight
//! requests get [`SHUTDOWN_GRACE`] to complete; whatever is still running
//! after that is abandoned. Store mutations are single statements, so no
//! rollback is needed for abandoned requests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;

/// Grace period granted to in-flight requests after a shutdown signal.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Wait for a shutdown signal (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Serve `router` on `listener` until a shutdown signal, then give in-flight
/// requests [`SHUTDOWN_GRACE`] before abandoning them.
///
/// The router is served with connect info so the logging middleware can see
/// remote addresses.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    serve_with_grace(listener, router, SHUTDOWN_GRACE).await
}

/// [`serve`] with an explicit grace period.
pub async fn serve_with_grace(
    listener: TcpListener,
    router: Router,
    grace: Duration,
) -> std::io::Result<()> {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let mut grace_rx = shutdown_rx.clone();
    let server = axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        let mut rx = shutdown_rx;
        let _ = rx.wait_for(|stopping| *stopping).await;
    });

    tokio::select! {
        result = async { server.await } => result,
        _ = async {
            let _ = grace_rx.wait_for(|stopping| *stopping).await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(
                grace_secs = grace.as_secs(),
                "grace period elapsed, abandoning in-flight requests"
            );
            Ok(())
        }
    }
}
