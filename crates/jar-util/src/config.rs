// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tunables for callers that keep helper defaults in a config file.
//!
//! The helpers themselves take every parameter explicitly; `UtilConfig` is a
//! serialisable bundle of the values a game usually pins once (direction
//! tolerance, rounding precision, generator seed).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::DEFAULT_DIRECTION_EPSILON;
use crate::math::{Prng, DEFAULT_ROUND_DIGITS};
use crate::random::UNIT_VECTOR_ATTEMPTS;

/// Seed used by [`UtilConfig::prng`] when the config does not pin one.
pub const DEFAULT_SEED: u64 = 0x5eed_cafe_f00d_beef;

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A value parsed but is outside its accepted domain.
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Helper defaults loaded from JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UtilConfig {
    /// Cosine threshold for [`crate::geometry::directions_approximately_equal`].
    pub direction_epsilon: f32,
    /// Decimal places for [`crate::math::round`].
    pub round_digits: i32,
    /// Redraw budget for [`crate::random::unit_vec3_with_attempts`].
    pub unit_vector_attempts: u32,
    /// Generator seed; `None` falls back to [`DEFAULT_SEED`].
    pub seed: Option<u64>,
}

impl Default for UtilConfig {
    fn default() -> Self {
        Self {
            direction_epsilon: DEFAULT_DIRECTION_EPSILON,
            round_digits: DEFAULT_ROUND_DIGITS,
            unit_vector_attempts: UNIT_VECTOR_ATTEMPTS,
            seed: None,
        }
    }
}

impl UtilConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        tracing::debug!(?config, "loaded helper config");
        Ok(config)
    }

    /// Read, parse, and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let bytes = fs::read(path.as_ref())?;
        Self::from_json_slice(&bytes)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Reject values the helpers cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-1.0..=1.0).contains(&self.direction_epsilon) {
            return Err(ConfigError::Invalid {
                field: "direction_epsilon",
                reason: format!("{} is not a cosine in [-1, 1]", self.direction_epsilon),
            });
        }
        // 10^digits must stay finite and non-zero in f32.
        if !(-38..=38).contains(&self.round_digits) {
            return Err(ConfigError::Invalid {
                field: "round_digits",
                reason: format!("{} is outside [-38, 38]", self.round_digits),
            });
        }
        if self.unit_vector_attempts == 0 {
            return Err(ConfigError::Invalid {
                field: "unit_vector_attempts",
                reason: "at least one draw is required".to_owned(),
            });
        }
        Ok(())
    }

    /// Generator seeded from [`UtilConfig::seed`].
    pub fn prng(&self) -> Prng {
        Prng::from_seed_u64(self.seed.unwrap_or(DEFAULT_SEED))
    }
}
