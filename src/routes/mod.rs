pub mod dashboard;
pub mod health;
pub mod reports;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/status", get(health::status))
        .route("/user-activity", get(reports::user_activity))
        .route("/media-stats", get(reports::media_stats))
        .route("/user-stats", get(reports::user_stats));

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&state.config.cors_allowed_origins))
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers(Any);

    // Request ID
    let x_request_id = http::HeaderName::from_static("x-request-id");

    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `*` allows any origin, otherwise a comma-separated list of origins.
fn allowed_origins(raw: &str) -> AllowOrigin {
    if raw.trim() == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
