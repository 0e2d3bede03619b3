//! Application state for the surface API.

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared, read-only application state.
///
/// Nothing here influences rendering; canvas parameters are owned by each
/// request.
pub struct AppState {
    /// Handle used by `/metrics` to render the Prometheus exposition.
    pub prometheus: PrometheusHandle,
}

impl AppState {
    pub fn new(prometheus: PrometheusHandle) -> Self {
        Self { prometheus }
    }
}
