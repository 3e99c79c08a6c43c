mod config;
mod documents;
mod errors;
mod export;
mod extraction;
mod intake;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

/// Dev server origin, always allowed alongside FRONTEND_URL.
const LOCAL_FRONTEND: &str = "http://localhost:5173";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentSift API v{}", env!("CARGO_PKG_VERSION"));

    std::fs::create_dir_all(&config.export_dir).with_context(|| {
        format!(
            "failed to create export directory {}",
            config.export_dir.display()
        )
    })?;
    info!(
        export_dir = %config.export_dir.display(),
        max_upload_files = config.max_upload_files,
        "Export directory ready"
    );

    let cors = cors_layer(config.frontend_url.as_deref());
    let state = AppState::new(config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Restricts CORS to the configured frontend plus the local dev server.
/// Without FRONTEND_URL every origin is allowed.
fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let Some(frontend_url) = frontend_url else {
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = [frontend_url, LOCAL_FRONTEND]
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
