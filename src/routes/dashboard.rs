use axum::response::Html;

const DASHBOARD_HTML: &str = include_str!("../../templates/dashboard.html");

/// Static page; the data is fetched client-side from the `/api` routes.
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
