use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskboard_sync::api::HttpTaskApi;
use taskboard_sync::config::Config;
use taskboard_sync::domain::Status;
use taskboard_sync::services::{BoardNotifier, StatusSyncController};

/// Connects to the configured task backend, loads the board once, and
/// prints per-column counts. Diagnostic tool for checking connectivity and
/// credentials outside the UI shell.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,taskboard_sync=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env, using defaults: {}", e);
        Config::default()
    });

    tracing::info!(url = config.api_base_url, "probing task backend");

    let api = HttpTaskApi::from_config(&config)?;
    let notifier = BoardNotifier::new(config.notice_buffer);
    let mut controller = StatusSyncController::new(Arc::new(api), notifier);

    let count = controller.load().await?;
    tracing::info!(count, "task collection loaded");

    let columns = controller.columns_view();
    for status in Status::all() {
        println!(
            "{:<12} {}",
            status.label(),
            columns.column(*status).len()
        );
    }

    Ok(())
}
