#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCategory {
    Videos,
    Photos,
    Audios,
}

impl MediaCategory {
    /// Maps a lowercase, dot-prefixed extension to its category.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".mp4" | ".avi" | ".mkv" => Some(MediaCategory::Videos),
            ".jpg" | ".jpeg" | ".png" | ".gif" => Some(MediaCategory::Photos),
            ".mp3" | ".wav" | ".aac" => Some(MediaCategory::Audios),
            _ => None,
        }
    }
}

/// Lowercased extension of the file's base name, including the leading dot.
///
/// Returns an empty string when the name has no dot, or when its only dots
/// lead the name (`.profile`, `..`).
pub fn file_extension(file_name: &str) -> String {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);

    match base.rfind('.') {
        Some(idx) if base[..idx].chars().any(|c| c != '.') => base[idx..].to_lowercase(),
        _ => String::new(),
    }
}
