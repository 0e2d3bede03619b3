//! Surface rendering handler.

use std::time::Instant;

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use surface_renderer::svg::SVG_CONTENT_TYPE;
use surface_renderer::SurfaceBuilder;
use tracing::{debug, error, instrument, Span};

use crate::metrics;
use crate::params::CanvasSize;

/// GET /surface - Render the surface as an SVG document
///
/// Accepts optional `width` and `height` query parameters in pixels.
/// Missing or malformed values fall back to 600x320; they never produce an
/// error response.
#[instrument(skip_all, fields(width, height))]
pub async fn surface_handler(Query(query): Query<Vec<(String, String)>>) -> Response {
    let size = CanvasSize::from_query(&query);
    let span = Span::current();
    span.record("width", size.width);
    span.record("height", size.height);

    let start = Instant::now();
    let canvas = size.canvas();

    // The grid walk is CPU bound; keep it off the async workers.
    let result =
        tokio::task::spawn_blocking(move || SurfaceBuilder::new(canvas).render_svg()).await;

    match result {
        Ok(Ok(rendered)) => {
            let elapsed = start.elapsed();
            metrics::record_render(&rendered.summary, elapsed);
            debug!(
                polygons = rendered.summary.polygons,
                skipped = rendered.summary.skipped,
                bytes = rendered.body.len(),
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "Rendered surface"
            );

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, SVG_CONTENT_TYPE)],
                rendered.body,
            )
                .into_response()
        }
        Ok(Err(e)) => {
            error!(error = %e, "Surface render failed");
            metrics::record_render_error();
            render_failed()
        }
        Err(e) => {
            error!(error = %e, "Surface render task panicked");
            metrics::record_render_error();
            render_failed()
        }
    }
}

fn render_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain")],
        "Failed to render surface",
    )
        .into_response()
}
