use crate::config::ServiceConfig;
use crate::handlers;
use crate::routes;
use crate::services::{get_metrics, MemoryStore, Store};
use axum::{
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub store: Arc<dyn Store>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        service_core::error::set_verbose_errors(config.server.verbose_errors);

        if config.server.enable_hot_reload {
            // Compiled binary: restart-on-change comes from an external
            // watcher, e.g. `cargo watch -x run`
            tracing::info!("Hot reload flag set; expecting an external source watcher");
        }

        let store: Arc<dyn Store> = Arc::new(MemoryStore::new(config.seed.enabled));

        for issue in store.integrity_issues().await {
            tracing::warn!(%issue, "Data integrity problem found, continuing anyway");
        }

        let state = AppState {
            config: config.clone(),
            store,
        };

        let app = Router::new()
            .route("/api/health", get(handlers::health_check))
            .route("/metrics", get(metrics_endpoint))
            .nest("/api/document", routes::document_routes())
            .with_state(state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(from_fn(metrics_middleware))
            .layer(from_fn(request_id_middleware))
            // Outermost so every response, 404s and preflights included,
            // carries the cross-origin headers
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn store(&self) -> Arc<dyn Store> {
        self.state.store.clone()
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
