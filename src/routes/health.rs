use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::services::report_service;
use crate::state::AppState;

pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn status(State(state): State<AppState>) -> Json<Value> {
    let artifacts = report_service::artifact_statuses(&state).await;
    let uptime = chrono::Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds();

    Json(json!({
        "data": {
            "artifacts": artifacts,
            "aggregate_interval_secs": state.config.aggregate_interval_secs,
            "uptime_seconds": uptime,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "error": null
    }))
}
