// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::math::Vec3;

/// Column‑major 4×4 matrix.
///
/// Only the rotational block is consumed by the helpers in this crate; it is
/// how a local-to-world [`crate::math::Quat`] is applied to directions.
///
/// # Examples
/// ```
/// use core::f32::consts::FRAC_PI_2;
/// use jar_util::math::{Quat, Vec3};
/// // Yaw=90°: +Z maps to +X
/// let r = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2).to_mat4();
/// let v = r.transform_direction(&Vec3::UNIT_Z);
/// assert!((v.x() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Mat4 {
    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// Only the rotational and scaling parts of the matrix affect the result.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let x = direction.component(0);
        let y = direction.component(1);
        let z = direction.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;

        Vec3::new(nx, ny, nz)
    }
}
