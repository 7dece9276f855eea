//! Read-only access to the photo storage database.

use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use crate::models::upload::UploadRecord;

/// Users joined to the media they own. Media without an owner drop out of
/// the inner join.
pub const UPLOADS_QUERY: &str = r#"
    SELECT u.Id, u.UserName, p.Id, p.FileName, p.Title, p.UploadDate
    FROM AspNetUsers u
    JOIN Photos p ON u.Id = p.UserId
"#;

pub struct UploadSource {
    conn: Connection,
}

impl UploadSource {
    /// Opens an existing database. A missing file is an error rather than a
    /// fresh empty database.
    pub fn open(path: impl AsRef<Path>) -> rusqlite::Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn fetch_uploads(&self) -> rusqlite::Result<Vec<UploadRecord>> {
        let mut stmt = self.conn.prepare(UPLOADS_QUERY)?;
        let rows = stmt.query_map([], |row| {
            Ok(UploadRecord {
                user_id: row.get(0)?,
                username: row.get(1)?,
                media_id: row.get(2)?,
                file_name: row.get(3)?,
                title: row.get(4)?,
                upload_date: row.get(5)?,
            })
        })?;

        rows.collect()
    }
}
