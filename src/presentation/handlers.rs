// HTTP request handlers
use crate::domain::display_mode::DisplayMode;
use crate::domain::load_state::LoadStatus;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::html::render_dashboard;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct ModeBody {
    pub mode: DisplayMode,
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub telemetry: LoadStatus,
    pub speedtest: LoadStatus,
    pub mode: DisplayMode,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Server-rendered dashboard page
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_dashboard(&state.dashboard_service.get_dashboard()))
}

/// Full dashboard view model
pub async fn get_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let dashboard = state.dashboard_service.get_dashboard();
    respond(&dashboard, accepts_brotli(&headers)).await
}

/// A single panel: metrics, timeseries, scenarios, hourly or geo
pub async fn get_view(
    Path(name): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let dashboard = state.dashboard_service.get_dashboard();
    let compress = accepts_brotli(&headers);

    match name.as_str() {
        "metrics" => respond(&dashboard.metrics, compress).await,
        "timeseries" => respond(&dashboard.timeseries, compress).await,
        "scenarios" => respond(&dashboard.scenarios, compress).await,
        "hourly" => respond(&dashboard.hourly, compress).await,
        "geo" => respond(&dashboard.geo, compress).await,
        _ => {
            tracing::debug!("Unknown view requested: {}", name);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Load state of both documents
pub async fn get_status(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.state.snapshot();
    let status = StatusBody {
        telemetry: snapshot.telemetry.status(),
        speedtest: snapshot.speedtest.status(),
        mode: snapshot.mode,
    };
    respond(&status, false).await
}

pub async fn toggle_mode(State(state): State<Arc<AppState>>) -> Json<ModeBody> {
    Json(ModeBody {
        mode: state.state.toggle_mode(),
    })
}

pub async fn set_mode(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ModeBody>,
) -> Json<ModeBody> {
    state.state.set_mode(body.mode);
    Json(ModeBody {
        mode: state.state.mode(),
    })
}

/// Form target for the page's mode button
pub async fn toggle_mode_form(State(state): State<Arc<AppState>>) -> Redirect {
    state.state.toggle_mode();
    Redirect::to("/")
}

/// Progressive dashboard frames until both documents have settled
pub async fn stream_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let rx = state.streaming_service.stream_dashboard();
    stream_from_receiver(rx, accepts_brotli(&headers)).await
}

async fn respond<T: Serialize>(data: &T, compress: bool) -> Response {
    match json_response(data, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
