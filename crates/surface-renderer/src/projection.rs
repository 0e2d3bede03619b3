//! Isometric projection of grid corners onto the canvas.

use crate::canvas::{Canvas, ANGLE, CELLS, XY_RANGE};
use crate::sampler::height_at;

/// A grid corner projected onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// Canvas x in pixels
    pub sx: f64,
    /// Canvas y in pixels (down is positive)
    pub sy: f64,
    /// Raw surface height, kept for shading and filtering
    pub z: f64,
}

/// Maps grid corner indices to projected canvas points.
///
/// Holds the canvas by value along with the precomputed axis trigonometry;
/// corners are recomputed on every call.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    canvas: Canvas,
    sin_angle: f64,
    cos_angle: f64,
}

impl Projector {
    pub fn new(canvas: Canvas) -> Self {
        let (sin_angle, cos_angle) = ANGLE.sin_cos();
        Self {
            canvas,
            sin_angle,
            cos_angle,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Domain coordinates of corner `(i, j)`.
    pub fn domain_coords(i: u32, j: u32) -> (f64, f64) {
        let cells = CELLS as f64;
        let x = XY_RANGE * (i as f64 / cells - 0.5);
        let y = XY_RANGE * (j as f64 / cells - 0.5);
        (x, y)
    }

    /// Project corner `(i, j)` of the grid. Indices range over `0..=CELLS`.
    pub fn corner(&self, i: u32, j: u32) -> GridPoint {
        let (x, y) = Self::domain_coords(i, j);
        let z = height_at(x, y);

        let canvas = &self.canvas;
        let sx = canvas.width() as f64 / 2.0 + (x - y) * self.cos_angle * canvas.xy_scale();
        let sy = canvas.height() as f64 / 2.0 + (x + y) * self.sin_angle * canvas.xy_scale()
            - z * canvas.z_scale();

        GridPoint { sx, sy, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI_6: f64 = std::f64::consts::PI / 6.0;

    #[test]
    fn test_domain_coords_center() {
        assert_eq!(Projector::domain_coords(50, 50), (0.0, 0.0));
        assert_eq!(Projector::domain_coords(0, 100), (-15.0, 15.0));
    }

    #[test]
    fn test_origin_corner_has_nan_height() {
        let projector = Projector::new(Canvas::default());
        let p = projector.corner(50, 50);
        assert!(p.z.is_nan());
        // x - y is still finite, only sy inherits the NaN
        assert_eq!(p.sx, 300.0);
        assert!(p.sy.is_nan());
    }

    #[test]
    fn test_projection_formula() {
        let canvas = Canvas::default();
        let projector = Projector::new(canvas);
        let p = projector.corner(10, 30);

        let (x, y) = (-12.0, -6.0);
        let z = height_at(x, y);
        let expected_sx = 300.0 + (x - y) * PI_6.cos() * 10.0;
        let expected_sy = 160.0 + (x + y) * PI_6.sin() * 10.0 - z * 128.0;

        assert!((p.sx - expected_sx).abs() < 1e-9);
        assert!((p.sy - expected_sy).abs() < 1e-9);
        assert!((p.z - z).abs() < 1e-12);
    }

    #[test]
    fn test_corners_on_diagonal_share_sx() {
        // x == y along the main diagonal, so every such corner sits on the
        // vertical centre line of the canvas.
        let projector = Projector::new(Canvas::new(800, 400));
        for k in [0, 13, 77, 100] {
            assert!((projector.corner(k, k).sx - 400.0).abs() < 1e-9);
        }
    }
}
