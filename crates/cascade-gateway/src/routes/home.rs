//! Embedded demo page.

use axum::{Router, response::Html, routing::get};

use cascade_http::error::method_not_allowed;

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / - Serve the embedded demo page.
async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Build home routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home).fallback(method_not_allowed))
}
