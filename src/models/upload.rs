/// One row of the users/media join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub user_id: String,
    /// Nullable in the identity schema.
    pub username: Option<String>,
    pub media_id: i64,
    pub file_name: String,
    pub title: String,
    pub upload_date: String,
}
