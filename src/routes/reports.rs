use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::models::artifact::Artifact;
use crate::services::report_service;
use crate::state::AppState;

pub async fn user_activity(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let report = report_service::load_report(&state, Artifact::UserActivity).await?;
    Ok(Json(report))
}

pub async fn media_stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let report = report_service::load_report(&state, Artifact::MediaStats).await?;
    Ok(Json(report))
}

pub async fn user_stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let report = report_service::load_report(&state, Artifact::UserStats).await?;
    Ok(Json(report))
}
