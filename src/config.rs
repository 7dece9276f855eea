use std::env;
use std::path::PathBuf;

use crate::models::artifact::Artifact;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub reports_dir: String,
    /// Zero disables the in-server aggregation scheduler.
    pub aggregate_interval_secs: u64,
    pub log_level: String,
    pub cors_allowed_origins: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parse_env("PORT", 5002),
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "photostorage.db".into()),
            reports_dir: env::var("REPORTS_DIR").unwrap_or_else(|_| "reports".into()),
            aggregate_interval_secs: parse_env("AGGREGATE_INTERVAL_SECS", 0),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".into()),
        }
    }

    pub fn reports_dir(&self) -> PathBuf {
        PathBuf::from(&self.reports_dir)
    }

    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.database_path)
    }

    pub fn artifact_path(&self, artifact: Artifact) -> PathBuf {
        self.reports_dir().join(artifact.file_name())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
