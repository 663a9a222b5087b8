// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hit ordering and list copy helpers.

use crate::math::Vec3;

/// Raycast hit as reported by the host engine.
///
/// Only `point` is read by [`order_hits_by_distance`]; `distance` is carried
/// through untouched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RaycastHit {
    /// World-space contact point.
    pub point: Vec3,
    /// Distance along the ray reported by the engine.
    pub distance: f32,
}

impl RaycastHit {
    /// Creates a hit record.
    pub const fn new(point: Vec3, distance: f32) -> Self {
        Self { point, distance }
    }
}

/// Returns `hits` sorted by ground-plane distance from `origin`, nearest first.
///
/// Distance ignores the vertical axis (see [`Vec3::remove_y`]). The sort is
/// stable, so equidistant hits keep their input order.
pub fn order_hits_by_distance(hits: &[RaycastHit], origin: Vec3) -> Vec<RaycastHit> {
    let ground = origin.remove_y();
    let mut keyed: Vec<(f32, RaycastHit)> = hits
        .iter()
        .map(|hit| (hit.point.remove_y().distance(&ground), *hit))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, hit)| hit).collect()
}

/// Element-wise copy of `list`.
pub fn copy_list<T: Clone>(list: &[T]) -> Vec<T> {
    list.to_vec()
}

/// New list holding `first` followed by `second`.
pub fn concatenate_lists<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(first.len() + second.len());
    out.extend_from_slice(first);
    out.extend_from_slice(second);
    out
}
