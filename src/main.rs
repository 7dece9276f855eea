use media_activity::background;
use media_activity::config::AppConfig;
use media_activity::routes;
use media_activity::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    tracing::info!("Starting media-activity v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        reports_dir = %config.reports_dir().display(),
        "Serving reports"
    );

    let state = AppState::new(config.clone());

    // Shutdown signal
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    let scheduler_handle = if config.aggregate_interval_secs > 0 {
        tracing::info!(
            interval_secs = config.aggregate_interval_secs,
            database = %config.database_path().display(),
            "Starting aggregation scheduler"
        );
        Some(tokio::spawn(background::aggregation_scheduler::run(
            state.clone(),
            shutdown_rx,
        )))
    } else {
        None
    };

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await
        .expect("Server error");

    if let Some(handle) = scheduler_handle {
        tracing::info!("Waiting for aggregation scheduler to finish");
        let _ = handle.await;
    }

    tracing::info!("Shutdown complete");
}

async fn shutdown_signal(shutdown_tx: tokio::sync::watch::Sender<bool>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
    let _ = shutdown_tx.send(true);
}
