use crate::services::aggregation_service;
use crate::state::AppState;
use std::time::Duration;
use tokio::sync::watch;

pub async fn run(state: AppState, mut shutdown: watch::Receiver<bool>) {
    let interval = Duration::from_secs(state.config.aggregate_interval_secs);

    loop {
        run_once(&state).await;

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = shutdown.changed() => {
                tracing::info!("Aggregation scheduler shutting down");
                return;
            }
        }
    }
}

/// Runs one aggregation on the blocking pool. Failures are logged and the
/// previous artifacts stay in place.
pub async fn run_once(state: &AppState) {
    let config = state.config.clone();

    match tokio::task::spawn_blocking(move || aggregation_service::run(&config)).await {
        Ok(Ok(outcome)) => {
            tracing::info!(
                rows = outcome.rows,
                users = outcome.users,
                "Scheduled aggregation finished"
            );
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Scheduled aggregation failed");
        }
        Err(e) => {
            tracing::error!(error = %e, "Scheduled aggregation task panicked");
        }
    }
}
