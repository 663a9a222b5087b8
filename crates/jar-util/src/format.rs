// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Clock-style formatting of elapsed seconds.
//!
//! Formatting truncates; it is a display helper, not a round-trippable codec.

use crate::error::MathError;

struct ClockParts {
    minutes: u64,
    seconds: u64,
    millis: u64,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn split(time: f32) -> Result<ClockParts, MathError> {
    if !time.is_finite() || time < 0.0 {
        tracing::debug!(time, "rejected time value");
        return Err(MathError::InvalidTime(time));
    }
    // Float-to-int `as` casts saturate, and `time` is finite and non-negative.
    let whole = time as u64;
    let millis = (f64::from(time) * 1000.0) as u64 % 1000;
    Ok(ClockParts {
        minutes: whole / 60,
        seconds: whole % 60,
        millis,
    })
}

/// Formats `time` seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so long durations widen the field.
///
/// # Errors
/// [`MathError::InvalidTime`] for negative or non-finite input.
///
/// # Examples
/// ```
/// use jar_util::format::format_time_seconds;
/// assert_eq!(format_time_seconds(75.9).unwrap(), "01:15");
/// ```
pub fn format_time_seconds(time: f32) -> Result<String, MathError> {
    let parts = split(time)?;
    Ok(format!("{:02}:{:02}", parts.minutes, parts.seconds))
}

/// Formats `time` seconds as `MM:SS:mmm`.
///
/// # Errors
/// [`MathError::InvalidTime`] for negative or non-finite input.
pub fn format_time_milliseconds(time: f32) -> Result<String, MathError> {
    let parts = split(time)?;
    Ok(format!(
        "{:02}:{:02}:{:03}",
        parts.minutes, parts.seconds, parts.millis
    ))
}
