// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy shared by every helper in the crate.

use thiserror::Error;

/// Errors emitted by the math, random, and formatting helpers.
///
/// Every helper reports failure immediately; nothing is retried except the
/// bounded redraw in [`crate::random::unit_vec3`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A float range had `min > max`, or `min == max` where the helper divides
    /// by the span.
    #[error("invalid range: min {min} / max {max}")]
    InvalidRange {
        /// Lower bound supplied by the caller.
        min: f32,
        /// Upper bound supplied by the caller.
        max: f32,
    },
    /// An integer range had `min > max`.
    #[error("invalid integer range: {min}..{max}")]
    InvalidIntRange {
        /// Lower bound supplied by the caller.
        min: i32,
        /// Upper bound supplied by the caller.
        max: i32,
    },
    /// A zero-length vector reached an operation that has to normalise it.
    #[error("degenerate vector in {operation}")]
    DegenerateVector {
        /// Name of the operation that rejected the vector.
        operation: &'static str,
    },
    /// A random pick was requested from an empty sequence.
    #[error("cannot pick from an empty sequence")]
    EmptySequence,
    /// A duration was negative, NaN, or infinite.
    #[error("invalid time value: {0}")]
    InvalidTime(f32),
}

impl MathError {
    pub(crate) fn degenerate(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected degenerate vector");
        Self::DegenerateVector { operation }
    }
}
