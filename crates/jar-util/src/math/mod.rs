// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers, vector value types, rotations, easing curves, and the
//! deterministic pseudo-random generator.
//!
//! All operations stay in `f32` to mirror the host engine's float32 mode.

use std::f32::consts::TAU;

use crate::error::MathError;

pub mod easing;
mod mat4;
mod prng;
mod quat;
mod vec2;
mod vec3;

pub use mat4::Mat4;
pub use prng::Prng;
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Decimal places used by [`round`] callers that do not pick their own.
pub const DEFAULT_ROUND_DIGITS: i32 = 3;

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
///
/// Use [`try_clamp`] when the bounds come from untrusted input.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Checked form of [`clamp`] that rejects `min > max`.
pub fn try_clamp(value: f32, min: f32, max: f32) -> Result<f32, MathError> {
    if min > max {
        return Err(MathError::InvalidRange { min, max });
    }
    Ok(value.max(min).min(max))
}

/// Clamps `value` to `[0, 1]`.
pub fn clamp01(value: f32) -> f32 {
    value.max(0.0).min(1.0)
}

/// Caps `value` at `max`; values already below are returned unchanged.
pub fn clamp_max(value: f32, max: f32) -> f32 {
    if value > max {
        return max;
    }
    value
}

/// Raises `value` to `min`; values already above are returned unchanged.
pub fn clamp_min(value: f32, min: f32) -> f32 {
    if value < min {
        return min;
    }
    value
}

/// Position of `t` between `min` and `max`, clamped to `[0, 1]`.
///
/// # Errors
/// [`MathError::InvalidRange`] when `min == max`, since the span is zero.
///
/// The quotient is taken in `f64`, so spans wider than `f32::MAX` still map
/// `min` to 0 and `max` to 1.
///
/// # Examples
/// ```
/// use jar_util::math::normalized_distance;
/// assert_eq!(normalized_distance(10.0, 20.0, 15.0).unwrap(), 0.5);
/// assert_eq!(normalized_distance(10.0, 20.0, 99.0).unwrap(), 1.0);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn normalized_distance(min: f32, max: f32, t: f32) -> Result<f32, MathError> {
    let span = f64::from(max) - f64::from(min);
    if span == 0.0 {
        tracing::debug!(min, max, "normalized_distance over an empty span");
        return Err(MathError::InvalidRange { min, max });
    }
    let ratio = (f64::from(t) - f64::from(min)) / span;
    Ok(ratio.clamp(0.0, 1.0) as f32)
}

/// Rounds `value` to `digits` decimal places, ties away from zero.
///
/// Negative `digits` round to tens, hundreds, and so on. Values too large to
/// carry a fraction at `digits` come back unchanged; values far below a
/// negative `digits` scale round to signed zero.
pub fn round(value: f32, digits: i32) -> f32 {
    let mult = 10.0_f32.powi(digits);
    if mult == 0.0 {
        return 0.0_f32.copysign(value);
    }
    let scaled = value * mult;
    if !mult.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / mult
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
