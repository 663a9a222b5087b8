// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use jar_util::math::easing::{ease_in_cubic, ease_out_cubic};
use jar_util::math::{self, Quat, Vec2, Vec3};
use jar_util::{linear_velocity_at_point, nearest_point_on_line_segment, point_on_circle};

// Pinned seed so failures reproduce across machines and CI. Override locally
// with PROPTEST_SEED when hunting for new counterexamples.
const SEED_BYTES: [u8; 32] = [
    0x1a, 0x2b, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0,
];

fn pinned_runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(PropConfig::default(), rng)
}

fn finite(limit: f32) -> impl Strategy<Value = f32> + Clone {
    -limit..limit
}

fn vec3(limit: f32) -> impl Strategy<Value = Vec3> + Clone {
    prop::array::uniform3(finite(limit)).prop_map(Vec3::from)
}

#[test]
fn normalized_distance_stays_in_unit_interval() {
    let strategy = (finite(1.0e3), finite(1.0e3), finite(1.0e4))
        .prop_filter("non-empty span", |(min, max, _)| (max - min).abs() > 1.0e-3);
    pinned_runner()
        .run(&strategy, |(min, max, t)| {
            let d = math::normalized_distance(min, max, t)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert!((0.0..=1.0).contains(&d), "{d} outside [0, 1]");
            prop_assert_eq!(math::normalized_distance(min, max, min), Ok(0.0));
            prop_assert_eq!(math::normalized_distance(min, max, max), Ok(1.0));
            Ok(())
        })
        .unwrap_or_else(|e| panic!("{e}"));
}

#[test]
fn round_with_zero_digits_is_plain_round() {
    pinned_runner()
        .run(&finite(1.0e6), |x| {
            prop_assert_eq!(math::round(x, 0), x.round());
            Ok(())
        })
        .unwrap_or_else(|e| panic!("{e}"));
}

#[test]
fn cubic_easing_is_monotonic_on_unit_interval() {
    pinned_runner()
        .run(&(0.0f32..=1.0, 0.0f32..=1.0), |(a, b)| {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_in_cubic(lo) <= ease_in_cubic(hi));
            prop_assert!(ease_out_cubic(lo) <= ease_out_cubic(hi));
            Ok(())
        })
        .unwrap_or_else(|e| panic!("{e}"));
}

#[test]
fn segment_projection_stays_on_segment() {
    let strategy = (vec3(100.0), vec3(100.0), vec3(500.0));
    pinned_runner()
        .run(&strategy, |(origin, end, point)| {
            let nearest = nearest_point_on_line_segment(origin, end, point);
            let heading = end.sub(&origin);
            let along = nearest.sub(&origin);
            let tolerance = 1.0e-3 * (1.0 + heading.length());
            prop_assert!(
                along.length() <= heading.length() + tolerance,
                "left segment: |along|={} |segment|={}",
                along.length(),
                heading.length()
            );
            // The projection parameter is never negative.
            prop_assert!(along.dot(&heading) >= -tolerance);
            Ok(())
        })
        .unwrap_or_else(|e| panic!("{e}"));
}

#[test]
fn point_on_circle_keeps_radius() {
    let strategy = (finite(100.0), finite(100.0), 0.0f32..50.0, finite(20.0));
    pinned_runner()
        .run(&strategy, |(cx, cy, radius, angle)| {
            let center = Vec2::new(cx, cy);
            let p = point_on_circle(center, radius, angle);
            let err = (p.distance(&center) - radius).abs();
            prop_assert!(err <= 1.0e-3, "radius drift {err}");
            Ok(())
        })
        .unwrap_or_else(|e| panic!("{e}"));
}

#[test]
fn zero_spin_returns_linear_velocity() {
    let strategy = (vec3(50.0), vec3(50.0), vec3(50.0), vec3(1.0), -3.0f32..3.0);
    pinned_runner()
        .run(&strategy, |(com, linear, local_point, axis, angle)| {
            let rotation = Quat::from_axis_angle(axis, angle);
            let v = linear_velocity_at_point(com, Vec3::ZERO, linear, rotation, local_point);
            prop_assert_eq!(v, linear);
            Ok(())
        })
        .unwrap_or_else(|e| panic!("{e}"));
}
