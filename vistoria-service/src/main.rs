use service_core::observability::init_tracing;
use vistoria_service::config::ServiceConfig;
use vistoria_service::services::init_metrics;
use vistoria_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Metrics recorder must be installed before any metrics are recorded
    init_metrics();

    let config = ServiceConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(&config.service_name, &config.log_level);

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
