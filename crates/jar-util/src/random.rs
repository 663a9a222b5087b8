// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Random scalar, vector, sign, and element sampling over an injected source.
//!
//! Nothing here touches global state: every helper takes the generator as a
//! `&mut` argument, so a seeded [`Prng`] makes a whole test suite reproducible.
//!
//! Range conventions:
//! - floats sample the half-open `[min, max)`;
//! - integers sample `[min, max)` with `max` exclusive;
//! - `min == max` returns `min`, `min > max` is [`MathError`].

use crate::error::MathError;
use crate::math::{Prng, Vec2, Vec3, EPSILON};

/// Redraws attempted by [`unit_vec3`] before reporting a degenerate sample.
pub const UNIT_VECTOR_ATTEMPTS: u32 = 16;

/// Uniform random capability consumed by the sampling helpers.
///
/// Implementors must be deterministic for a given seed if callers rely on
/// reproducible sequences.
pub trait RandomSource {
    /// Returns the next float in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Returns the next integer in the inclusive range `[min, max]`.
    ///
    /// Callers guarantee `min <= max`.
    fn next_int(&mut self, min: i32, max: i32) -> i32;

    /// Returns a fair coin flip.
    fn next_bool(&mut self) -> bool {
        self.next_f32() < 0.5
    }
}

impl RandomSource for Prng {
    fn next_f32(&mut self) -> f32 {
        Prng::next_f32(self)
    }

    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        Prng::next_int(self, min, max)
    }

    fn next_bool(&mut self) -> bool {
        Prng::next_bool(self)
    }
}

/// Adapter exposing any [`rand::RngCore`] generator as a [`RandomSource`].
///
/// ```
/// # #[cfg(feature = "rand")]
/// # {
/// use jar_util::random::{float_between, RandAdapter};
/// let mut rng = RandAdapter::new(rand::thread_rng());
/// let v = float_between(&mut rng, 2.0, 3.0).unwrap();
/// assert!((2.0..3.0).contains(&v));
/// # }
/// ```
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RandAdapter<R> {
    inner: R,
}

#[cfg(feature = "rand")]
impl<R: rand::RngCore> RandAdapter<R> {
    /// Wraps a `rand` generator.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "rand")]
impl<R: rand::RngCore> RandomSource for RandAdapter<R> {
    fn next_f32(&mut self) -> f32 {
        use rand::Rng;
        self.inner.gen::<f32>()
    }

    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        self.inner.gen_range(min..=max)
    }

    fn next_bool(&mut self) -> bool {
        use rand::Rng;
        self.inner.gen::<bool>()
    }
}

/// Uniform float in `[min, max)`.
///
/// # Errors
/// [`MathError::InvalidRange`] when `min > max` or either bound is not finite.
///
/// The span is taken in `f64`, so any pair of finite bounds is accepted,
/// including `[-f32::MAX, f32::MAX)`.
///
/// # Examples
/// ```
/// use jar_util::math::Prng;
/// use jar_util::random::float_between;
/// let mut rng = Prng::from_seed_u64(42);
/// let v = float_between(&mut rng, -1.0, 1.0).unwrap();
/// assert!((-1.0..1.0).contains(&v));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn float_between<R>(rng: &mut R, min: f32, max: f32) -> Result<f32, MathError>
where
    R: RandomSource + ?Sized,
{
    if min > max || !min.is_finite() || !max.is_finite() {
        return Err(MathError::InvalidRange { min, max });
    }
    if min == max {
        return Ok(min);
    }
    let span = f64::from(max) - f64::from(min);
    let value = (f64::from(min) + span * f64::from(rng.next_f32())) as f32;
    // Narrowing to `f32` can round up onto `max` for u just below 1.
    if value >= max {
        return Ok(min.max(prev_f32(max)));
    }
    Ok(value)
}

/// Uniform integer in `[min, max)`; `max` is exclusive.
///
/// # Errors
/// [`MathError::InvalidIntRange`] when `min > max`.
pub fn int_between<R>(rng: &mut R, min: i32, max: i32) -> Result<i32, MathError>
where
    R: RandomSource + ?Sized,
{
    if min > max {
        return Err(MathError::InvalidIntRange { min, max });
    }
    if min == max {
        return Ok(min);
    }
    Ok(rng.next_int(min, max - 1))
}

/// Vector with each component drawn by [`float_between`].
pub fn vec2_between<R>(rng: &mut R, min: f32, max: f32) -> Result<Vec2, MathError>
where
    R: RandomSource + ?Sized,
{
    let x = float_between(rng, min, max)?;
    let y = float_between(rng, min, max)?;
    Ok(Vec2::new(x, y))
}

/// Vector with each component drawn by [`float_between`].
pub fn vec3_between<R>(rng: &mut R, min: f32, max: f32) -> Result<Vec3, MathError>
where
    R: RandomSource + ?Sized,
{
    let x = float_between(rng, min, max)?;
    let y = float_between(rng, min, max)?;
    let z = float_between(rng, min, max)?;
    Ok(Vec3::new(x, y, z))
}

/// Random unit direction: a normalised sample of the `[-1, 1)` cube.
///
/// Uses [`UNIT_VECTOR_ATTEMPTS`]; see [`unit_vec3_with_attempts`].
pub fn unit_vec3<R>(rng: &mut R) -> Result<Vec3, MathError>
where
    R: RandomSource + ?Sized,
{
    unit_vec3_with_attempts(rng, UNIT_VECTOR_ATTEMPTS)
}

/// Random unit direction, redrawing near-zero samples up to `attempts` times.
///
/// # Errors
/// [`MathError::DegenerateVector`] when every draw had length ≤ `EPSILON`
/// (including `attempts == 0`).
pub fn unit_vec3_with_attempts<R>(rng: &mut R, attempts: u32) -> Result<Vec3, MathError>
where
    R: RandomSource + ?Sized,
{
    for attempt in 0..attempts {
        let sample = vec3_between(rng, -1.0, 1.0)?;
        if sample.length() > EPSILON {
            return Ok(sample.normalize());
        }
        tracing::trace!(attempt, "redrawing degenerate unit vector sample");
    }
    tracing::warn!(attempts, "unit vector sampling exhausted its redraws");
    Err(MathError::degenerate("unit_vec3"))
}

/// Returns `value` or `-value` on a single fair coin flip.
pub fn random_sign<R>(rng: &mut R, value: f32) -> f32
where
    R: RandomSource + ?Sized,
{
    if rng.next_bool() {
        value
    } else {
        -value
    }
}

/// Uniform pick from `items`.
///
/// # Errors
/// [`MathError::EmptySequence`] when `items` is empty.
pub fn random_element<'a, T, R>(rng: &mut R, items: &'a [T]) -> Result<&'a T, MathError>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return Err(MathError::EmptySequence);
    }
    items.get(index_below(rng, items.len())).ok_or(MathError::EmptySequence)
}

/// Uniform index in `[0, len)` for `len >= 1`.
///
/// Lengths that fit one `next_int` draw use it directly; longer slices join
/// three 31-bit draws and reject the biased tail.
fn index_below<R>(rng: &mut R, len: usize) -> usize
where
    R: RandomSource + ?Sized,
{
    const DRAW_BITS: u32 = 31;
    const SPACE: u128 = 1 << (3 * DRAW_BITS);

    if let Ok(last) = i32::try_from(len - 1) {
        return usize::try_from(rng.next_int(0, last)).unwrap_or(0);
    }
    let len_wide = len as u128;
    let limit = SPACE - SPACE % len_wide;
    loop {
        let mut wide = 0_u128;
        for _ in 0..3 {
            let draw = u128::try_from(rng.next_int(0, i32::MAX)).unwrap_or(0);
            wide = (wide << DRAW_BITS) | draw;
        }
        if wide < limit {
            return usize::try_from(wide % len_wide).unwrap_or(0);
        }
        tracing::trace!(len, "redrawing biased element index");
    }
}

/// Largest float strictly below `value` (finite, non-NaN input).
fn prev_f32(value: f32) -> f32 {
    if value == 0.0 {
        return -f32::from_bits(1);
    }
    let bits = value.to_bits();
    if value > 0.0 {
        f32::from_bits(bits - 1)
    } else {
        f32::from_bits(bits + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted source replaying fixed outputs.
    struct Scripted {
        floats: Vec<f32>,
        cursor: usize,
    }

    impl Scripted {
        fn new(floats: &[f32]) -> Self {
            Self {
                floats: floats.to_vec(),
                cursor: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_f32(&mut self) -> f32 {
            let v = self.floats[self.cursor % self.floats.len()];
            self.cursor += 1;
            v
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        fn next_int(&mut self, min: i32, max: i32) -> i32 {
            let span = (max - min + 1) as f32;
            min + (self.next_f32() * span) as i32
        }
    }

    #[test]
    fn float_between_maps_unit_samples_linearly() {
        let mut rng = Scripted::new(&[0.0, 0.25, 0.5]);
        assert_eq!(float_between(&mut rng, 2.0, 6.0), Ok(2.0));
        assert_eq!(float_between(&mut rng, 2.0, 6.0), Ok(3.0));
        assert_eq!(float_between(&mut rng, 2.0, 6.0), Ok(4.0));
    }

    #[test]
    fn float_between_never_returns_max() {
        let mut rng = Scripted::new(&[f32::from_bits(0x3f7f_ffff)]);
        let v = float_between(&mut rng, 1.0e7, 1.0e7 + 1.0);
        assert!(matches!(v, Ok(x) if x < 1.0e7 + 1.0), "{v:?}");
    }

    #[test]
    fn float_between_spans_the_full_f32_range() {
        let mut rng = Scripted::new(&[0.0, 0.25, 0.5, f32::from_bits(0x3f7f_ffff)]);
        let (min, max) = (-f32::MAX, f32::MAX);
        assert_eq!(float_between(&mut rng, min, max), Ok(min));
        assert_eq!(float_between(&mut rng, min, max), Ok(min / 2.0));
        assert_eq!(float_between(&mut rng, min, max), Ok(0.0));
        let top = float_between(&mut rng, min, max);
        assert!(matches!(top, Ok(x) if x.is_finite() && x < max), "{top:?}");
    }

    #[test]
    fn float_between_rejects_inverted_range() {
        let mut rng = Prng::from_seed_u64(1);
        assert_eq!(
            float_between(&mut rng, 1.0, 0.0),
            Err(MathError::InvalidRange { min: 1.0, max: 0.0 })
        );
    }

    #[test]
    fn equal_bounds_short_circuit() {
        let mut rng = Prng::from_seed_u64(1);
        assert_eq!(float_between(&mut rng, 3.5, 3.5), Ok(3.5));
        assert_eq!(int_between(&mut rng, -4, -4), Ok(-4));
    }

    #[test]
    fn int_between_excludes_max() {
        let mut rng = Prng::from_seed_u64(5);
        for _ in 0..500 {
            let v = int_between(&mut rng, 0, 3);
            assert!(matches!(v, Ok(0..=2)), "{v:?}");
        }
        assert_eq!(
            int_between(&mut rng, 3, 0),
            Err(MathError::InvalidIntRange { min: 3, max: 0 })
        );
    }

    #[test]
    fn unit_vec3_is_normalised() {
        let mut rng = Prng::from_seed_u64(99);
        for _ in 0..100 {
            let v = unit_vec3(&mut rng);
            assert!(matches!(v, Ok(u) if (u.length() - 1.0).abs() < 1e-5), "{v:?}");
        }
    }

    #[test]
    fn unit_vec3_redraws_then_gives_up() {
        // u = 0.5 maps to 0.0 on [-1, 1), so every component is zero.
        let mut zeros = Scripted::new(&[0.5]);
        assert_eq!(
            unit_vec3(&mut zeros),
            Err(MathError::DegenerateVector { operation: "unit_vec3" })
        );
        assert_eq!(zeros.cursor, 3 * UNIT_VECTOR_ATTEMPTS as usize);

        // First draw degenerate, second usable.
        let mut rng = Scripted::new(&[0.5, 0.5, 0.5, 1.0 / 4.0, 0.5, 0.5]);
        assert_eq!(unit_vec3(&mut rng), Ok(Vec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn random_sign_flips_on_coin() {
        let mut rng = Scripted::new(&[0.1, 0.9]);
        assert_eq!(random_sign(&mut rng, 2.0), 2.0);
        assert_eq!(random_sign(&mut rng, 2.0), -2.0);
    }

    #[test]
    fn random_element_rejects_empty() {
        let mut rng = Prng::from_seed_u64(3);
        let empty: [u8; 0] = [];
        assert_eq!(random_element(&mut rng, &empty), Err(MathError::EmptySequence));
    }

    #[test]
    fn random_element_reaches_every_item() {
        let mut rng = Prng::from_seed_u64(3);
        let items = ["a", "b", "c"];
        let mut seen = [false; 3];
        for _ in 0..200 {
            if let Ok(item) = random_element(&mut rng, &items) {
                let idx = items.iter().position(|i| i == item).unwrap_or(0);
                seen[idx] = true;
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    /// Source replaying fixed integer draws, clamped into the asked range.
    struct ScriptedInts {
        ints: Vec<i32>,
        cursor: usize,
    }

    impl RandomSource for ScriptedInts {
        fn next_f32(&mut self) -> f32 {
            0.0
        }

        fn next_int(&mut self, min: i32, max: i32) -> i32 {
            let v = self.ints[self.cursor % self.ints.len()];
            self.cursor += 1;
            v.clamp(min, max)
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn index_below_reaches_past_i32_max() {
        let len = 1_usize << 40;
        let mut rng = ScriptedInts {
            ints: vec![0, 1 << 8, 5],
            cursor: 0,
        };
        // (0 << 62) | (256 << 31) | 5
        let index = index_below(&mut rng, len);
        assert_eq!(index, (256_usize << 31) | 5);
        assert!(index >= 1 << 31);
        assert_eq!(rng.cursor, 3);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn index_below_rejects_the_biased_tail() {
        // 2^93 % 3 != 0, so the all-ones draw lands in the rejected tail.
        let len = 3_usize << 32;
        let mut rng = ScriptedInts {
            ints: vec![i32::MAX, i32::MAX, i32::MAX, 0, 0, 7],
            cursor: 0,
        };
        assert_eq!(index_below(&mut rng, len), 7);
        assert_eq!(rng.cursor, 6);
    }

    #[test]
    fn index_below_uses_one_draw_for_short_slices() {
        let mut rng = ScriptedInts {
            ints: vec![2],
            cursor: 0,
        };
        assert_eq!(index_below(&mut rng, 3), 2);
        assert_eq!(rng.cursor, 1);
    }
}
