//! Canvas sizing and the fixed sampling grid.

use std::f64::consts::PI;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 600;

/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 320;

/// Number of grid cells along each axis.
pub const CELLS: u32 = 100;

/// Axis range; the xy-scale maps this many domain units onto half the width.
pub const XY_RANGE: f64 = 30.0;

/// Vertical exaggeration applied to heights, as a fraction of canvas height.
pub const Z_EXAGGERATION: f64 = 0.4;

/// Angle of the x and y axes on the canvas (30°).
pub const ANGLE: f64 = PI / 6.0;

/// Per-request canvas parameters.
///
/// Scales are derived once in [`Canvas::new`] and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    xy_scale: f64,
    z_scale: f64,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            xy_scale: width as f64 / 2.0 / XY_RANGE,
            z_scale: height as f64 * Z_EXAGGERATION,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per x or y domain unit.
    pub fn xy_scale(&self) -> f64 {
        self.xy_scale
    }

    /// Pixels per unit of height.
    pub fn z_scale(&self) -> f64 {
        self.z_scale
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
