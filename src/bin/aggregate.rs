use anyhow::Context;
use media_activity::config::AppConfig;
use media_activity::services::aggregation_service;
use tracing_subscriber::EnvFilter;

/// One batch aggregation run. Exits non-zero on any failure.
fn main() {
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&config) {
        tracing::error!(error = %format!("{:#}", e), "Aggregation failed");
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    tracing::info!(
        database = %config.database_path().display(),
        reports_dir = %config.reports_dir().display(),
        "Starting aggregation"
    );

    let outcome = aggregation_service::run(config).with_context(|| {
        format!(
            "aggregating uploads from {}",
            config.database_path().display()
        )
    })?;

    for (artifact, path) in &outcome.artifacts {
        println!("{} saved to {}", artifact.label(), path.display());
    }

    Ok(())
}
