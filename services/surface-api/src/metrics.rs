//! Metrics recorded through the `metrics` facade.
//!
//! The Prometheus recorder is installed once at startup; without it these
//! calls are no-ops.

use std::time::Duration;

use ::metrics::{counter, histogram};
use surface_renderer::RenderSummary;

/// Record a successfully rendered surface.
pub fn record_render(summary: &RenderSummary, elapsed: Duration) {
    counter!("surface_requests_total").increment(1);
    counter!("surface_polygons_total").increment(summary.polygons as u64);
    counter!("surface_cells_skipped_total").increment(summary.skipped as u64);
    histogram!("surface_render_duration_ms").record(elapsed.as_secs_f64() * 1000.0);
}

/// Record a render that failed before a response body existed.
pub fn record_render_error() {
    counter!("surface_requests_total").increment(1);
    counter!("surface_render_errors_total").increment(1);
}
