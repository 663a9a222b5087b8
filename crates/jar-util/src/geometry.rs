// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Direction comparison, projections, nearest-point queries, and rigid-body
//! point velocity.
//!
//! Helpers that must normalise an input reject zero-length vectors with
//! [`MathError::DegenerateVector`] instead of propagating NaN.

use crate::error::MathError;
use crate::math::{self, Quat, Vec2, Vec3};

/// Cosine threshold used when callers have no tolerance of their own.
pub const DEFAULT_DIRECTION_EPSILON: f32 = 0.8;

/// Returns `true` when the cosine between the two directions exceeds `epsilon`.
///
/// `epsilon` is a cosine, not an angle; pass `angle.cos()` for an angular
/// tolerance.
///
/// # Errors
/// [`MathError::DegenerateVector`] when either direction has zero length.
pub fn directions_approximately_equal(
    dir1: Vec3,
    dir2: Vec3,
    epsilon: f32,
) -> Result<bool, MathError> {
    let a = dir1.try_normalize("directions_approximately_equal")?;
    let b = dir2.try_normalize("directions_approximately_equal")?;
    Ok(a.dot(&b) > epsilon)
}

/// Compass heading in degrees from `p0` towards `p1`.
///
/// 0° points along +Y and angles grow clockwise toward +X (90°), so the result
/// is `atan2(dx, dy)` rather than the usual `atan2(dy, dx)`. Range is
/// `(-180, 180]`.
///
/// # Errors
/// [`MathError::DegenerateVector`] when the positions coincide.
///
/// # Examples
/// ```
/// use jar_util::geometry::angle_between_positions;
/// use jar_util::math::Vec2;
/// let origin = Vec2::ZERO;
/// assert_eq!(angle_between_positions(origin, Vec2::new(0.0, 1.0)).unwrap(), 0.0);
/// assert_eq!(angle_between_positions(origin, Vec2::new(1.0, 0.0)).unwrap(), 90.0);
/// ```
pub fn angle_between_positions(p0: Vec2, p1: Vec2) -> Result<f32, MathError> {
    let dir = p1.sub(&p0).try_normalize("angle_between_positions")?;
    Ok(math::rad_to_deg(dir.x().atan2(dir.y())))
}

/// World-space velocity of a point fixed to a rotating rigid body.
///
/// `v = local_to_world · (angular_velocity × (local_point − center_of_mass)) + linear_velocity`
///
/// `center_of_mass` and `local_point` are in body space; `angular_velocity` is
/// applied in body space before the rotation takes it to world space.
pub fn linear_velocity_at_point(
    center_of_mass: Vec3,
    angular_velocity: Vec3,
    linear_velocity: Vec3,
    local_to_world: Quat,
    local_point: Vec3,
) -> Vec3 {
    let arm = local_point.sub(&center_of_mass);
    let tangential = angular_velocity.cross(&arm);
    local_to_world.rotate(&tangential).add(&linear_velocity)
}

/// Kinematic snapshot of a rigid body as handed over by the host engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RigidBodyState {
    /// Centre of mass in body space.
    pub center_of_mass: Vec3,
    /// Angular velocity in radians per second.
    pub angular_velocity: Vec3,
    /// Linear velocity of the centre of mass in world space.
    pub linear_velocity: Vec3,
    /// Body-to-world rotation.
    pub rotation: Quat,
}

impl RigidBodyState {
    /// See [`linear_velocity_at_point`].
    pub fn velocity_at_point(&self, local_point: Vec3) -> Vec3 {
        linear_velocity_at_point(
            self.center_of_mass,
            self.angular_velocity,
            self.linear_velocity,
            self.rotation,
            local_point,
        )
    }
}

/// Point at `angle` radians on the circle around `center`.
pub fn point_on_circle(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(radius * cos + center.x(), radius * sin + center.y())
}

/// Radial projection of `start` onto the circle around `center`.
///
/// # Errors
/// [`MathError::DegenerateVector`] when `start` is the centre, where every
/// point on the circle is equally near.
pub fn nearest_point_on_circle(start: Vec2, center: Vec2, radius: f32) -> Result<Vec2, MathError> {
    let dir = start.sub(&center).try_normalize("nearest_point_on_circle")?;
    Ok(center.add(&dir.scale(radius)))
}

/// Closest point to `point` on the segment `origin → end`.
///
/// The projection parameter is clamped to `[0, |end − origin|]`, so the result
/// never leaves the segment. A zero-length segment collapses to `origin`.
pub fn nearest_point_on_line_segment(origin: Vec3, end: Vec3, point: Vec3) -> Vec3 {
    let heading = end.sub(&origin);
    let max_param = heading.length();
    let dir = heading.normalize();
    let param = math::clamp(point.sub(&origin).dot(&dir), 0.0, max_param);
    origin.add(&dir.scale(param))
}

/// Closest point to `point` on the infinite line through `line_point`.
///
/// `line_dir` is normalised internally.
///
/// # Errors
/// [`MathError::DegenerateVector`] when `line_dir` has zero length.
pub fn nearest_point_on_infinite_line(
    line_point: Vec3,
    line_dir: Vec3,
    point: Vec3,
) -> Result<Vec3, MathError> {
    let dir = line_dir.try_normalize("nearest_point_on_infinite_line")?;
    let param = point.sub(&line_point).dot(&dir);
    Ok(line_point.add(&dir.scale(param)))
}

/// Scalar projection of `vector` onto `direction`.
///
/// With `normalize` set the result is the signed length of `vector` along
/// `direction`; without it the raw dot product is returned and scales with
/// `|direction|`.
///
/// # Errors
/// [`MathError::DegenerateVector`] when `normalize` is set and `direction` has
/// zero length.
pub fn magnitude_in_direction(
    vector: Vec3,
    direction: Vec3,
    normalize: bool,
) -> Result<f32, MathError> {
    let direction = if normalize {
        direction.try_normalize("magnitude_in_direction")?
    } else {
        direction
    };
    Ok(vector.dot(&direction))
}
