// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dashboard_page, get_dashboard, get_status, get_view, health_check, set_mode, stream_dashboard,
    toggle_mode, toggle_mode_form,
};
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    // JSON bodies are compressed by the response builders, so there is no
    // CompressionLayer here to avoid compressing twice.
    Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/mode/toggle", post(toggle_mode_form))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/dashboard/stream", get(stream_dashboard))
        .route("/api/views/:name", get(get_view))
        .route("/api/status", get(get_status))
        .route("/api/mode", put(set_mode))
        .route("/api/mode/toggle", post(toggle_mode))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
