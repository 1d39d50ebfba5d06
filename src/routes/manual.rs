//! Manual page route.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

/// `GET /manual` — the pre-rendered manual page.
pub async fn manual_page(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page)
}
