use axum::response::Html;

/// GET / — the analysis form page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
