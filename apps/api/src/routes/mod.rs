pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    response::Html,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../ui/index.html");

/// GET /
/// The upload page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyze",
            post(handlers::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/analyses/:id/improved_resume.docx",
            get(handlers::handle_download),
        )
        .with_state(state)
}
