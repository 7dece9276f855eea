/// The three JSON documents produced by an aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    UserActivity,
    MediaStats,
    UserStats,
}

impl Artifact {
    pub const ALL: [Artifact; 3] = [
        Artifact::UserActivity,
        Artifact::MediaStats,
        Artifact::UserStats,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::UserActivity => "user_activity_log.json",
            Artifact::MediaStats => "media_stats.json",
            Artifact::UserStats => "user_stats.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Artifact::UserActivity => "user_activity",
            Artifact::MediaStats => "media_stats",
            Artifact::UserStats => "user_stats",
        }
    }
}
