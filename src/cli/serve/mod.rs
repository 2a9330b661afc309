//! Serve command - runs API + UI combined on the same port

use std::net::SocketAddr;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::api::state::AppState;
use crate::api::{self, health};
use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Run the combined API + UI server
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config);

    let state = crate::create_app_state(&config);
    let app = create_router_with_ui(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting server (API + UI) on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&config.logging);
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Create router with both API and UI endpoints
fn create_router_with_ui(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Prediction API consumed by the form
        .nest("/api", api::create_api_router())
        // UI static files
        .nest_service(
            "/ui",
            ServeDir::new("public").fallback(ServeFile::new("public/index.html")),
        )
        // Redirect root to UI
        .route("/", get(|| async { Redirect::permanent("/ui/") }))
        // Add state and middleware
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
