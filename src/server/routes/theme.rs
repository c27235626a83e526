//! Theme Route
//!
//! GET /theme.css - brand colors and font stack as CSS custom properties.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::server::state::AppState;

/// GET /theme.css
///
/// Served with `no-cache` so a restart with a new `[theme]` is picked up on
/// the next page load.
pub async fn stylesheet(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        state.theme_css.to_string(),
    )
}
