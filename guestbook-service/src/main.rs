use guestbook_service::config::GuestbookConfig;
use guestbook_service::services::init_metrics;
use guestbook_service::startup::Application;
use service_core::observability::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GuestbookConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "guestbook-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;

    // Must be installed before any metrics are recorded
    init_metrics()?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    let result = app.run_until_stopped().await;
    if let Err(e) = &result {
        tracing::error!("Server error: {}", e);
    }

    shutdown_tracing();
    result.map_err(Into::into)
}
