// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Polynomial easing curves.
//!
//! Each curve maps `0 → 0` and `1 → 1`. Inputs outside `[0, 1]` are evaluated
//! on the same polynomial rather than clamped.

/// Cubic ease-in: `t³`.
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

/// Cubic ease-out: `1 - (1 - t)³`.
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quadratic ease-in: `t²`.
pub fn ease_in_quad(t: f32) -> f32 {
    t * t
}

/// Quadratic ease-out: `1 - (1 - t)²`.
pub fn ease_out_quad(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}
