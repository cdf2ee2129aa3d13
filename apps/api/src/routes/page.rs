use axum::response::Html;

/// GET /
/// Serves the LeadLens page, compiled into the binary at build time.
pub async fn page_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
