//! Height function sampled over the domain grid.

/// Height of the surface at `(x, y)`: `sin(r) / r` with `r` the distance
/// from the origin.
///
/// The quotient is taken literally, so the origin itself yields NaN (0/0)
/// rather than the limit 1. Callers drop such samples.
pub fn height_at(x: f64, y: f64) -> f64 {
    let r = x.hypot(y);
    r.sin() / r
}
