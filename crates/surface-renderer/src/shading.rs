//! Degenerate-cell filtering and fill colour selection.

use std::fmt;

/// Intensity multiplier applied to the scaled peak height.
const INTENSITY_PER_PIXEL: f64 = 25.0;

/// True if any height is NaN or infinite.
///
/// A cell with such a corner contributes nothing to the output.
pub fn has_non_finite(heights: &[f64]) -> bool {
    heights.iter().any(|z| !z.is_finite())
}

/// Largest of `heights`, or NaN for an empty slice.
pub fn max_height(heights: &[f64]) -> f64 {
    let mut iter = heights.iter().copied();
    let first = match iter.next() {
        Some(z) => z,
        None => return f64::NAN,
    };
    iter.fold(first, |max, z| if z > max { z } else { max })
}

/// Polygon fill colour.
///
/// Channels are not clamped to 0..=255. A tall enough surface produces
/// larger values, which are written out unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fill {
    pub red: i64,
    pub blue: i64,
}

impl Fill {
    /// Colour for a cell whose corner heights are `heights`.
    ///
    /// Peaks above the plane shade red, troughs shade blue, intensity
    /// proportional to the peak height in canvas pixels.
    pub fn for_heights(heights: &[f64], z_scale: f64) -> Self {
        let max_z = max_height(heights) * z_scale;

        if max_z > 0.0 {
            Self {
                red: (max_z * INTENSITY_PER_PIXEL) as i64,
                blue: 0,
            }
        } else if max_z < 0.0 {
            Self {
                red: 0,
                blue: (max_z.abs() * INTENSITY_PER_PIXEL) as i64,
            }
        } else {
            Self::default()
        }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, 0, {})", self.red, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_non_finite() {
        assert!(!has_non_finite(&[0.0, 1.0, -2.5, 1e300]));
        assert!(has_non_finite(&[0.0, f64::NAN, 1.0, 1.0]));
        assert!(has_non_finite(&[f64::INFINITY, 0.0]));
        assert!(has_non_finite(&[0.0, f64::NEG_INFINITY]));
        assert!(!has_non_finite(&[]));
    }

    #[test]
    fn test_max_height() {
        assert_eq!(max_height(&[0.1, -0.3, 0.25, 0.0]), 0.25);
        assert_eq!(max_height(&[-0.1, -0.3]), -0.1);
        assert!(max_height(&[]).is_nan());
    }

    #[test]
    fn test_positive_peak_is_red() {
        let fill = Fill::for_heights(&[0.2, 0.1, -0.1, 0.05], 128.0);
        // 0.2 * 128 * 25 = 640, left unclamped
        assert_eq!(fill, Fill { red: 640, blue: 0 });
    }

    #[test]
    fn test_negative_peak_is_blue() {
        let fill = Fill::for_heights(&[-0.2, -0.1, -0.15, -0.3], 128.0);
        // max is -0.1 -> |-12.8| * 25 = 320
        assert_eq!(fill, Fill { red: 0, blue: 320 });
    }

    #[test]
    fn test_flat_cell_is_black() {
        let fill = Fill::for_heights(&[0.0, 0.0, -1.0, -0.5], 128.0);
        assert_eq!(fill, Fill { red: 0, blue: 0 });
    }

    #[test]
    fn test_intensity_truncates() {
        // 0.001 * 100 * 25 = 2.5
        let fill = Fill::for_heights(&[0.001], 100.0);
        assert_eq!(fill.red, 2);
    }

    #[test]
    fn test_display() {
        let fill = Fill { red: 12, blue: 0 };
        assert_eq!(fill.to_string(), "rgb(12, 0, 0)");
    }
}
