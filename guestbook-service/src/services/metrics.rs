//! Metrics collection and Prometheus export.
//!
//! Initializes the metrics exporter and renders the /metrics payload.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder.
///
/// Must run before any metrics are recorded. Later calls are no-ops.
pub fn init_metrics() -> Result<(), AppError> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "failed to install Prometheus recorder: {}",
            e
        ))
    })?;

    // A concurrent caller may have won the race; its handle is equivalent
    let _ = METRICS_HANDLE.set(handle);
    Ok(())
}

/// Current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}
