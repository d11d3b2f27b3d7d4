//! Scalar helpers shared by the update path and the render path.

use crate::foundation::consts::{LINES, SCALE_DIVISOR, SQUARES, STEP_GAP};

/// Local progress of segment `i` out of `n` for a global `scale`.
///
/// `scale - i/n` is clamped to `[0, 1/n]` and stretched back to `[0, 1]`, so segments fill in
/// order as `scale` rises from `0` to `1`.
pub fn divide_scale(scale: f64, i: usize, n: usize) -> f64 {
    debug_assert!(n > 0, "divide_scale needs at least one segment");
    let inv = 1.0 / n as f64;
    (scale - i as f64 * inv).max(0.0).min(inv) * n as f64
}

/// Step index `floor(scale / 0.51)`; 0 for the first half of a step, 1 for the second.
pub(crate) fn step_index(scale: f64) -> f64 {
    (scale / SCALE_DIVISOR).floor()
}

/// Interpolates between the reciprocal rates `1/a` and `1/b` by the step index.
pub(crate) fn mirror_rate(scale: f64, a: usize, b: usize) -> f64 {
    let k = step_index(scale);
    (1.0 - k) / a as f64 + k / b as f64
}

/// Signed scale delta applied on one tick.
pub(crate) fn step_delta(scale: f64, sign: f64) -> f64 {
    mirror_rate(scale, LINES, LINES * SQUARES) * sign * STEP_GAP
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scale.rs"]
mod tests;
