use service_core::config::Config as CoreConfig;
use std::sync::Once;
use vistoria_service::config::{Environment, SeedSettings, ServerSettings, ServiceConfig};
use vistoria_service::services::init_metrics;
use vistoria_service::startup::Application;

// The Prometheus recorder is process-wide; install it once per test binary
static INIT_METRICS: Once = Once::new();

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        INIT_METRICS.call_once(init_metrics);

        let config = ServiceConfig {
            common: CoreConfig { port: 0 },
            environment: Environment::Dev,
            service_name: "vistoria-service".to_string(),
            log_level: "info".to_string(),
            server: ServerSettings {
                enable_hot_reload: false,
                verbose_errors: true,
            },
            seed: SeedSettings { enabled: true },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
