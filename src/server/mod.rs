// HTML Renderer - HTTP Server Module
// Ingestion and retrieval endpoints plus the fixed pages around them

mod handlers;
mod response;
pub mod types;

pub use handlers::{
    create_router, handle_content, handle_list_samples, handle_render_content,
    handle_upload_content, health_check,
};
pub use response::{status_for, IngestOutcome};
pub use types::{HealthResponse, RenderContentResponse, SamplesResponse};

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ingest::{IngestionRouter, SampleLibrary};
use crate::store::ContentStore;

/// Shared handler state. Cloning is cheap; every clone sees the same store.
#[derive(Clone)]
pub struct AppState {
    pub store: ContentStore,
    pub ingestion: IngestionRouter,
}

impl AppState {
    pub fn new(store: ContentStore, samples: SampleLibrary) -> Self {
        let ingestion = IngestionRouter::new(store.clone(), samples);
        Self { store, ingestion }
    }
}

/// Router plus the layers the running server uses.
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let app = create_router(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http());

    match cors_layer(&config.cors_origins) {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

/// The content server: one store, built at startup, shared by all handlers.
pub struct ContentServer {
    config: ServerConfig,
    state: AppState,
}

impl ContentServer {
    pub fn new(config: ServerConfig) -> Self {
        let samples = SampleLibrary::new(config.samples_dir.clone());
        let state = AppState::new(ContentStore::new(), samples);
        Self { config, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Start the HTTP server and run until Ctrl-C or SIGTERM.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let app = build_app(self.state.clone(), &self.config);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        tracing::info!(
            samples_dir = %self.config.samples_dir.display(),
            "Starting HTML renderer on http://{}",
            addr
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        tracing::info!(entries = self.state.store.len(), "Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cors_layer_without_origins() {
        assert!(cors_layer(&[]).is_none());
    }

    #[test]
    fn test_cors_layer_with_origins() {
        assert!(cors_layer(&["http://localhost:3000".to_string()]).is_some());
    }

    #[test]
    fn test_server_shares_one_store() {
        let server = ContentServer::new(ServerConfig::default());
        let id = server.state().ingestion.store().put("<p>x</p>");
        assert!(server.state().store.contains(&id));
    }
}
