//! Segment angle primitives used by the midline computer.
//!
//! `d_ref` is the delta along the reference column (column 0) and `d_fiber`
//! the delta along a fiber-boundary column between two consecutive rows.

/// Single-argument arctangent of `d_ref / d_fiber`, range [-π/2, π/2].
///
/// A zero `d_fiber` follows IEEE-754 division: `atan(±∞) = ±π/2` and
/// `0 / 0` yields NaN.
#[inline]
pub fn tangent_angle(d_ref: f64, d_fiber: f64) -> f64 {
    (d_ref / d_fiber).atan()
}

/// Quadrant-aware variant, range (-π, π]. Defined for every pair except
/// `(0, 0)`, where it returns 0.
#[inline]
pub fn tangent_angle_quadrant(d_ref: f64, d_fiber: f64) -> f64 {
    d_ref.atan2(d_fiber)
}

/// True when the fiber delta cannot produce a well-defined slope.
#[inline]
pub fn is_degenerate(d_fiber: f64) -> bool {
    d_fiber == 0.0 || !d_fiber.is_finite()
}
