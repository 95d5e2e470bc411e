use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::core::provider::{self, FileSource};
use crate::domain::model::PortfolioDocument;
use crate::domain::ports::ProviderConfig;
use crate::utils::error::Result;

/// The document is written exactly once, before the listener starts
/// accepting. After that it is read-only, so request handlers share it
/// without synchronization.
pub struct AppState {
    pub document: PortfolioDocument,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(health_handler))
        .route("/portfolio", get(portfolio_handler))
        .layer(cors)
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

async fn portfolio_handler(State(state): State<Arc<AppState>>) -> Json<PortfolioDocument> {
    Json(state.document.clone())
}

pub async fn serve<C: ProviderConfig>(config: &C) -> Result<()> {
    let source = FileSource::new(config.document_path());
    let document = provider::load_document(&source).await;

    let app = router(Arc::new(AppState { document }));

    let address = format!("0.0.0.0:{}", config.port());
    let listener = TcpListener::bind(&address).await?;

    info!("Server running on {}", address);
    info!("Health check: http://localhost:{}/health", config.port());
    info!(
        "Portfolio endpoint: http://localhost:{}/portfolio",
        config.port()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
