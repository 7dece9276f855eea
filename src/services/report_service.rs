use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::artifact::Artifact;
use crate::persistence::artifacts::read_artifact;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ArtifactStatus {
    pub name: &'static str,
    pub file_name: &'static str,
    pub present: bool,
    pub size_bytes: Option<u64>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Re-reads the artifact on every call; nothing is cached between requests.
pub async fn load_report(state: &AppState, artifact: Artifact) -> Result<Value, AppError> {
    let path = state.config.artifact_path(artifact);
    read_artifact(&path).await.map_err(|e| {
        tracing::warn!(
            artifact = artifact.label(),
            path = %path.display(),
            error = %e,
            "Failed to load report"
        );
        e
    })
}

pub async fn artifact_statuses(state: &AppState) -> Vec<ArtifactStatus> {
    let mut statuses = Vec::with_capacity(Artifact::ALL.len());

    for artifact in Artifact::ALL {
        let path = state.config.artifact_path(artifact);
        let meta = tokio::fs::metadata(&path).await.ok();

        statuses.push(ArtifactStatus {
            name: artifact.label(),
            file_name: artifact.file_name(),
            present: meta.is_some(),
            size_bytes: meta.as_ref().map(|m| m.len()),
            modified_at: meta
                .as_ref()
                .and_then(|m| m.modified().ok())
                .map(DateTime::<Utc>::from),
        });
    }

    statuses
}
