//! Standard normal density and the bounding box it is sampled in.

use std::f64::consts::PI;

/// Half-width of the sampled interval: x is drawn from `[-BOUND, BOUND)`.
pub const BOUND: f64 = 5.0;

/// Height of the bounding box. The density peaks at `1/sqrt(2*pi) ≈ 0.3989`,
/// so every point of the curve lies below it.
pub const CEILING: f64 = 0.5;

/// Area of the bounding rectangle `[-BOUND, BOUND] x [0, CEILING]`.
pub const BOX_AREA: f64 = 2.0 * BOUND * CEILING;

/// Mass of the standard normal on `[-5, 5]`, i.e. `erf(5 / sqrt(2))`.
pub const TRUE_MASS: f64 = 0.999_999_426_696_856_3;

/// Pi as hardcoded by the legacy implementation.
pub const LEGACY_PI: f64 = 3.14159;

/// Standard normal probability density at `x`.
///
/// ```
/// use intpdf::math::monte_carlo::normal::standard_normal_pdf;
/// let peak = standard_normal_pdf(0.0);
/// assert!((peak - 0.398_942_280_401_432_7).abs() < 1e-15);
/// ```
pub fn standard_normal_pdf(x: f64) -> f64 {
    (-x * x / 2.0).exp() / (2.0 * PI).sqrt()
}

/// Density as the legacy code computed it: `x` squared in single precision,
/// the exponential in double, pi truncated to `3.14159`, and the result
/// narrowed back to `f32`.
pub fn legacy_standard_normal_pdf(x: f32) -> f32 {
    let exponent = f64::from(-x * x) / 2.0;
    (exponent.exp() / (2.0 * LEGACY_PI).sqrt()) as f32
}
