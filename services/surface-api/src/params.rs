//! Query parameter resolution for surface requests.
//!
//! Nothing in here fails: missing or malformed values fall back to the
//! defaults, one parameter at a time.

use surface_renderer::canvas::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use surface_renderer::Canvas;

/// Resolved canvas size for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl CanvasSize {
    /// Resolve `width` and `height` from decoded query pairs.
    ///
    /// The first occurrence of a key wins; later repeats are ignored.
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        Self {
            width: parse_dimension(first_value(pairs, "width"), DEFAULT_WIDTH),
            height: parse_dimension(first_value(pairs, "height"), DEFAULT_HEIGHT),
        }
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }
}

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Parse a pixel dimension, or return `default`.
///
/// Only plain base-10 digits are accepted; signs, whitespace, zero and
/// values beyond `u32` all fall back.
pub fn parse_dimension(value: Option<&str>, default: u32) -> u32 {
    match value {
        Some(v) if !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()) => {
            match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => default,
            }
        }
        _ => default,
    }
}
