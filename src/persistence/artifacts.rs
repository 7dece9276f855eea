use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::path::Path;

use crate::error::{AggregateError, AppError};

/// Serializes `value` with four-space indentation and replaces `path` with it.
pub fn write_artifact<T: Serialize>(path: &Path, value: &T) -> Result<(), AggregateError> {
    let mut data = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut data, formatter);
    value.serialize(&mut ser)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &data)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Reads an artifact fresh from disk. Key order is preserved.
pub async fn read_artifact(path: &Path) -> Result<Value, AppError> {
    let data = tokio::fs::read(path).await?;
    let value = serde_json::from_slice(&data)?;
    Ok(value)
}
