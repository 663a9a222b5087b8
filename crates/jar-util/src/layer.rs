// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Physics/render layer masks.

/// Bit set of up to 32 layers; bit `n` set means layer `n` is included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Mask containing no layers.
    pub const NONE: Self = Self(0);

    /// Mask containing every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Returns `true` when `layer` is part of the mask.
    ///
    /// Layers outside `0..32` are never contained.
    ///
    /// # Examples
    /// ```
    /// use jar_util::layer::LayerMask;
    /// let mask = LayerMask(0b1010);
    /// assert!(mask.contains(1));
    /// assert!(!mask.contains(2));
    /// ```
    pub fn contains(self, layer: u32) -> bool {
        1u32.checked_shl(layer).is_some_and(|bit| self.0 & bit != 0)
    }

    /// Copy of the mask with `layer` added; out-of-range layers are ignored.
    pub fn with(self, layer: u32) -> Self {
        Self(self.0 | 1u32.checked_shl(layer).unwrap_or(0))
    }
}

impl From<u32> for LayerMask {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}
