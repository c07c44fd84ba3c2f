//! Codepad Server - HTTP front end for `codepad-core`
//!
//! ```text
//! POST /run      → routes::run      → api::run
//! POST /autofix  → routes::autofix  → api::autofix
//! POST /help     → routes::help     → api::help
//! GET  /*        → static_files::serve
//! ```
//!
//! Any other method on the API paths also falls through to the static
//! handler, which answers `not found`. Every route sits behind the
//! permissive CORS middleware in [`cors`].

pub mod config;
pub mod cors;
pub mod routes;
pub mod static_files;

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{any, post};
use axum::{middleware, Router};
use tokio::net::TcpListener;

pub use config::ServerConfig;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub static_dir: Arc<PathBuf>,
}

/// Build the router for `config`
pub fn app(config: &ServerConfig) -> Router {
    let state = AppState {
        static_dir: Arc::new(config.static_dir.clone()),
    };

    Router::new()
        .route("/run", post(routes::run).fallback(static_files::serve))
        .route("/autofix", post(routes::autofix).fallback(static_files::serve))
        .route("/help", post(routes::help).fallback(static_files::serve))
        .route("/{*path}", any(static_files::serve_path))
        .fallback(static_files::serve)
        .with_state(state)
        .layer(middleware::from_fn(cors::cors))
}

/// Bind `config.bind_addr()` and serve until Ctrl-C
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, static_dir = %config.static_dir.display(), "listening");
    serve_on(listener, config).await
}

/// Serve on an already bound listener until Ctrl-C
pub async fn serve_on(listener: TcpListener, config: &ServerConfig) -> std::io::Result<()> {
    axum::serve(listener, app(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
