// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! jar-util: stateless gameplay helpers over small vector value types.
//!
//! Every helper is an independent leaf function: random sampling over an
//! injected [`random::RandomSource`], vector geometry, scalar clamping and
//! rounding, easing curves, clock formatting, hit ordering, layer masks, and
//! scene capability queries. Nothing holds state between calls.
//!
//! Degenerate inputs (zero-length directions, empty ranges, empty sequences,
//! negative durations) are reported as [`MathError`] instead of producing NaN
//! or a silent default.
#![forbid(unsafe_code)]

pub mod collections;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod layer;
pub mod math;
pub mod random;
pub mod scene;

// Re-exports for stable public API
pub use collections::{concatenate_lists, copy_list, order_hits_by_distance, RaycastHit};
pub use config::{ConfigError, UtilConfig};
pub use error::MathError;
pub use format::{format_time_milliseconds, format_time_seconds};
pub use geometry::{
    angle_between_positions, directions_approximately_equal, linear_velocity_at_point,
    magnitude_in_direction, nearest_point_on_circle, nearest_point_on_infinite_line,
    nearest_point_on_line_segment, point_on_circle, RigidBodyState, DEFAULT_DIRECTION_EPSILON,
};
pub use layer::LayerMask;
pub use math::{Mat4, Prng, Quat, Vec2, Vec3};
pub use random::RandomSource;
pub use scene::{find_interfaces_of_type, find_objects_of_type, SceneObject, SceneRegistry};
