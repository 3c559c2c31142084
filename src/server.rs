//! Axum router and server setup.
//! Used by: main.

use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr};

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::console;
use crate::error::{Error, Result};
use crate::handlers;

/// No route extracts a body, so request bodies never reach a handler.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::root::welcome).fallback(handlers::not_found))
        .route("/health", get(handlers::health::health).fallback(handlers::not_found))
        .fallback(handlers::not_found)
}

pub async fn bind(port: u16) -> Result<TcpListener> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { port, source })?;
    tracing::info!("listening on {}", addr);
    Ok(listener)
}

/// Serves until `shutdown` resolves, then lets in-flight requests finish.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

pub async fn run(config: Config) -> Result<()> {
    let listener = bind(config.port).await?;
    console::print_startup(config.port);
    serve(listener, shutdown_signal()).await
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
