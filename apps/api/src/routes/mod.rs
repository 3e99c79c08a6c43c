pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::export::handlers::{self as export, EXPORTS_ROUTE};
use crate::intake::handlers as intake;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let exports = ServeDir::new(&state.config.export_dir);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes/parse", post(intake::handle_parse_text))
        .route("/api/v1/resumes/upload", post(intake::handle_upload))
        .route("/api/v1/resumes/scan-folder", post(intake::handle_scan_folder))
        .route("/api/v1/resumes/export", post(export::handle_export))
        // Written exports
        .nest_service(EXPORTS_ROUTE, exports)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
