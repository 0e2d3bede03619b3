//! Error types for surface rendering.

use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised while writing a rendered surface.
///
/// Degenerate cells are not errors; they are dropped from the output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write SVG output: {0}")]
    Io(#[from] std::io::Error),
}
