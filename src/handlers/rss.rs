//! RSS feed handler

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::feed::render_feed;
use crate::state::AppState;

/// GET /rss
///
/// Renders the current snapshot as a single-item feed. Never fails:
/// before the first successful fetch the zero-value snapshot is served.
pub async fn get_rss(State(state): State<AppState>) -> Response {
    let snapshot = state.snapshot.read().await.clone();

    (
        [(header::CONTENT_TYPE, "application/rss+xml; charset=utf-8")],
        render_feed(&snapshot, &state.config.counter_url),
    )
        .into_response()
}
