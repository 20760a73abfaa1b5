//! # HTTP Server for Stipple Cards
//!
//! Every request, on any path, renders a new card and answers with an HTML
//! `<img>` tag carrying the PNG inline.
//!
//! ## Usage
//!
//! ```bash
//! stipplecard serve --listen 0.0.0.0:8000 --storage local --images-dir images
//! curl -X POST -d '{"color":"#00FF00"}' http://localhost:8000/
//! ```

mod handlers;
mod state;

pub use handlers::stipple::{handle_request, image_tag};
pub use state::{AppState, DEFAULT_LISTEN_ADDR, ServerConfig};

use axum::Router;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::StippleError;

/// Build the router. The stipple handler answers every path and method.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(handlers::stipple::handle)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use stipplecard::server::{serve, ServerConfig};
/// use stipplecard::storage::StorageConfig;
///
/// # async fn example() -> Result<(), stipplecard::error::StippleError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8000".to_string(),
///     storage: StorageConfig::Local { dir: "images".into() },
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), StippleError> {
    let storage = config.storage.clone().build()?;
    let storage_name = storage.name();
    let app = router(Arc::new(AppState::new(storage)));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            StippleError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    tracing::info!(
        listen = %config.listen_addr,
        storage = storage_name,
        "stipplecard HTTP server started"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| StippleError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
