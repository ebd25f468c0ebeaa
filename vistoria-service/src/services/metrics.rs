use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Must run once, before any metric is
/// recorded.
pub fn init_metrics() {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if PROMETHEUS_HANDLE.set(handle).is_err() {
        panic!("metrics recorder already initialized");
    }
}

/// Current metrics in Prometheus text format, for the /metrics endpoint.
pub fn get_metrics() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}
