//! # Service
//!
//! Plumbing shared by every day of the course.
//!
//! Each day is its own small HTTP service, but they all boot the same way:
//!
//! - Load settings: defaults, then a TOML file, then environment variables
//! - Initialize `tracing` with the configured level (`RUST_LOG` still wins)
//! - Build an [`axum::Router`] and hand it to [`serve`]
//! - Shut down gracefully on Ctrl+C or SIGTERM
//!
//! Handlers report failures through [`error::AppError`], which renders as
//! `{"detail": ...}` JSON. The [`extract`] wrappers turn malformed query,
//! path and body input into 422 responses of the same shape.
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
};
use signal::ctrl_c;
#[cfg(unix)]
use signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

pub mod config;
pub mod error;
pub mod extract;
pub mod health;
pub mod telemetry;

pub use error::{AppError, FieldError};
pub use extract::{Json, Path, Query};

/// Wrap `app` with the shared layers and serve it until a shutdown signal.
pub async fn serve(app: Router, host: &str, port: u16) -> std::io::Result<()> {
    let app = layered(app);

    let address = format!("{host}:{port}");
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn layered(app: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    app.layer(cors).layer(TraceLayer::new_for_http())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
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
}
