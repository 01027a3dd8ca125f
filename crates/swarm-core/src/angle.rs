//! Wrap/clamp numerics and the circular mean.
//!
//! These are the numeric workhorses of the steering rule.  `wrap` serves two
//! ranges with very different magnitudes — world coordinates (hundreds of
//! units) and headings (`2π`) — so it is implemented with modulo arithmetic
//! rather than repeated subtraction: O(1) for arbitrarily large finite
//! inputs, and exact at the half-open boundary.

use std::f32::consts::PI;

/// Shift `value` by integer multiples of `max - min` until it lies in
/// `[min, max)`.
///
/// # Precondition
/// `max > min` and both finite.  A non-positive span makes the torus
/// ill-defined; callers (bounds construction, heading math) guarantee it.
#[inline]
pub fn wrap(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    // rem_euclid returns [0, span) in exact arithmetic, but f32 rounding can
    // push a tiny negative input up to exactly `span`; fold that onto `min`
    // so the half-open invariant survives.
    let rem = (value - min).rem_euclid(span);
    let wrapped = min + rem;
    if wrapped >= max { min } else { wrapped }
}

/// Restrict `value` to `[-limit, limit]`.
///
/// # Precondition
/// `limit >= 0` (callers pass the fixed, positive turning rate).
#[inline]
pub fn clamp_abs(value: f32, limit: f32) -> f32 {
    value.clamp(-limit, limit)
}

/// Wrap an angle into the canonical heading range `[-π, π)`.
#[inline]
pub fn wrap_angle(theta: f32) -> f32 {
    wrap(theta, -PI, PI)
}

/// Circular mean of a set of angles.
///
/// Sums the unit vectors `(cos θ, sin θ)` and returns the `atan2` of the
/// averaged vector, so the wrap discontinuity at ±π never skews the result
/// the way averaging raw angles would.
///
/// Degenerate inputs do not error: when opposite angles cancel, the summed
/// vector is near zero and `atan2` of the f32 rounding residue picks an
/// unspecified direction — finite, but carrying no meaning.  An empty slice
/// yields `0.0` exactly; the steering rule guards on the neighbor count
/// before calling this, so neither case affects a live boid.
pub fn mean_angle(angles: &[f32]) -> f32 {
    if angles.is_empty() {
        return 0.0;
    }
    let mut sum_x = 0.0_f32;
    let mut sum_y = 0.0_f32;
    for &theta in angles {
        sum_x += theta.cos();
        sum_y += theta.sin();
    }
    let len = angles.len() as f32;
    (sum_y / len).atan2(sum_x / len)
}
