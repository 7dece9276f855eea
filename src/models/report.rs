use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::MediaCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    #[serde(rename = "photo_id")]
    pub media_id: i64,
    pub file_name: String,
    pub title: String,
    pub upload_date: String,
}

/// Every upload of one user, in the order the rows were read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReport {
    pub user_id: String,
    pub username: Option<String>,
    #[serde(rename = "photos")]
    pub entries: Vec<MediaEntry>,
}

/// Counts keep the order in which each key was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTypeStats {
    pub total: u64,
    pub types: IndexMap<String, u64>,
    pub uploads_by_date: IndexMap<String, u64>,
    pub uploaded_by_user: IndexMap<String, u64>,
}

/// Key used in `uploaded_by_user` for uploads of a user without a name.
pub const UNNAMED_USER_KEY: &str = "null";

impl MediaTypeStats {
    pub fn record(&mut self, extension: &str, upload_day: &str, username: Option<&str>) {
        let user_key = username.unwrap_or(UNNAMED_USER_KEY);

        self.total += 1;
        *self.types.entry(extension.to_string()).or_insert(0) += 1;
        *self.uploads_by_date.entry(upload_day.to_string()).or_insert(0) += 1;
        *self.uploaded_by_user.entry(user_key.to_string()).or_insert(0) += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaStats {
    pub videos: MediaTypeStats,
    pub photos: MediaTypeStats,
    pub audios: MediaTypeStats,
}

impl MediaStats {
    pub fn bucket_mut(&mut self, category: MediaCategory) -> &mut MediaTypeStats {
        match category {
            MediaCategory::Videos => &mut self.videos,
            MediaCategory::Photos => &mut self.photos,
            MediaCategory::Audios => &mut self.audios,
        }
    }

    pub fn classified_total(&self) -> u64 {
        self.videos.total + self.photos.total + self.audios.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub username: Option<String>,
    pub total_uploads: u64,
    pub last_upload_date: Option<String>,
}

/// Output of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reports {
    pub user_activity: Vec<UserReport>,
    pub media_stats: MediaStats,
    pub user_stats: IndexMap<String, UserStats>,
}
