use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::AggregateError;
use crate::models::artifact::Artifact;
use crate::models::media_type::{file_extension, MediaCategory};
use crate::models::report::{MediaEntry, Reports, UserReport, UserStats};
use crate::models::upload::UploadRecord;
use crate::persistence::artifacts::write_artifact;
use crate::persistence::database::UploadSource;

/// Summary of one run, with where each artifact was written.
#[derive(Debug, Clone)]
pub struct AggregationOutcome {
    pub rows: usize,
    pub users: usize,
    pub classified: u64,
    pub artifacts: Vec<(Artifact, PathBuf)>,
}

/// Calendar-date part of an ISO-8601 timestamp (everything before the first `T`).
pub fn upload_day(record: &UploadRecord) -> Result<&str, AggregateError> {
    record
        .upload_date
        .split_once('T')
        .map(|(day, _)| day)
        .ok_or_else(|| AggregateError::MalformedTimestamp {
            user_id: record.user_id.clone(),
            media_id: record.media_id,
            upload_date: record.upload_date.clone(),
        })
}

/// Single pass over the joined rows building all three reports.
///
/// Rows with an unrecognized extension still count toward the user's
/// activity log and upload stats; they are only left out of the per-type
/// media stats. `last_upload_date` is a plain string comparison, so every
/// timestamp must share one format and offset.
pub fn aggregate<I>(records: I) -> Result<Reports, AggregateError>
where
    I: IntoIterator<Item = UploadRecord>,
{
    let mut reports = Reports::default();
    let mut report_index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let extension = file_extension(&record.file_name);
        let day = upload_day(&record)?;

        if let Some(category) = MediaCategory::from_extension(&extension) {
            reports
                .media_stats
                .bucket_mut(category)
                .record(&extension, day, record.username.as_deref());
        }

        let stats = reports
            .user_stats
            .entry(record.user_id.clone())
            .or_insert_with(|| UserStats {
                username: record.username.clone(),
                total_uploads: 0,
                last_upload_date: None,
            });
        stats.total_uploads += 1;
        if stats
            .last_upload_date
            .as_deref()
            .map_or(true, |last| record.upload_date.as_str() > last)
        {
            stats.last_upload_date = Some(record.upload_date.clone());
        }

        let idx = *report_index
            .entry(record.user_id.clone())
            .or_insert_with(|| {
                reports.user_activity.push(UserReport {
                    user_id: record.user_id.clone(),
                    username: record.username.clone(),
                    entries: Vec::new(),
                });
                reports.user_activity.len() - 1
            });
        reports.user_activity[idx].entries.push(MediaEntry {
            media_id: record.media_id,
            file_name: record.file_name,
            title: record.title,
            upload_date: record.upload_date,
        });
    }

    Ok(reports)
}

/// Writes the three artifacts into the configured reports directory.
pub fn write_reports(
    config: &AppConfig,
    reports: &Reports,
) -> Result<Vec<(Artifact, PathBuf)>, AggregateError> {
    std::fs::create_dir_all(config.reports_dir())?;

    let mut written = Vec::with_capacity(Artifact::ALL.len());
    for artifact in Artifact::ALL {
        let path = config.artifact_path(artifact);
        match artifact {
            Artifact::UserActivity => write_artifact(&path, &reports.user_activity)?,
            Artifact::MediaStats => write_artifact(&path, &reports.media_stats)?,
            Artifact::UserStats => write_artifact(&path, &reports.user_stats)?,
        }
        tracing::debug!(artifact = artifact.label(), path = %path.display(), "Artifact written");
        written.push((artifact, path));
    }

    Ok(written)
}

/// Full batch run: query the database, aggregate, write the artifacts.
pub fn run(config: &AppConfig) -> Result<AggregationOutcome, AggregateError> {
    let source = UploadSource::open(config.database_path())?;
    run_with_source(config, &source)
}

pub fn run_with_source(
    config: &AppConfig,
    source: &UploadSource,
) -> Result<AggregationOutcome, AggregateError> {
    let records = source.fetch_uploads()?;
    let rows = records.len();
    tracing::debug!(rows, "Fetched upload rows");

    let reports = aggregate(records)?;
    let artifacts = write_reports(config, &reports)?;

    let outcome = AggregationOutcome {
        rows,
        users: reports.user_activity.len(),
        classified: reports.media_stats.classified_total(),
        artifacts,
    };

    tracing::info!(
        rows = outcome.rows,
        users = outcome.users,
        classified = outcome.classified,
        "Aggregation completed"
    );

    Ok(outcome)
}
