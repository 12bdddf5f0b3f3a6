// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Boundary policies for floating-point domains.
//!
//! Integral domains have an exact overflow criterion: a step either fits
//! below `MAX` or it does not. Floating-point domains round, so the question
//! "does `acc + inc` exceed `MAX`?" depends on whether the comparison is made
//! before or after rounding. `FloatBoundary` makes that choice explicit.
//!
//! - `Representable` commits a step whenever its rounded result is finite.
//!   This is the IEEE-754 overflow criterion itself and needs no tolerance.
//! - `Legacy` compares the headroom `MAX - acc` against the increment with a
//!   non-strict `<=`, and the accumulator against `dec + MIN` with a strict
//!   `<`. `MIN` is the lowest finite value here too, not the smallest
//!   positive normal. The headroom subtraction is itself rounded, so this rejects some
//!   steps that land exactly on `MAX` (for instance five steps of
//!   `f64::MAX / 5` from zero).
//! - `Guarded` reserves a band of `epsilons` relative epsilons below `MAX`
//!   and above `MIN`. A step landing inside the band of the bound it moves
//!   towards is rejected.
//!
//! Whatever the policy, a step whose rounded result is non-finite is always
//! rejected.

use num_traits::{Float, NumCast};

/// How a floating-point step near a domain bound is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FloatBoundary {
    /// A step is accepted iff its rounded result is finite.
    #[default]
    Representable,
    /// Overflow when `MAX - acc <= inc`, underflow when `acc < dec + MIN`.
    Legacy,
    /// Reject results within `epsilons * EPSILON * MAX` of the approached bound.
    Guarded {
        /// Width of the guard band, in multiples of the machine epsilon
        /// relative to `MAX`.
        epsilons: u32,
    },
}

impl FloatBoundary {
    /// Returns the width of the band that a committed value must keep from
    /// both bounds of `T`.
    ///
    /// Zero for every policy but `Guarded`. The band never exceeds `MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use overstep_core::num::boundary::FloatBoundary;
    /// assert_eq!(FloatBoundary::Representable.guard_band::<f64>(), 0.0);
    ///
    /// let band: f64 = FloatBoundary::Guarded { epsilons: 2 }.guard_band();
    /// assert_eq!(band, 2.0 * f64::EPSILON * f64::MAX);
    /// ```
    #[inline]
    pub fn guard_band<T>(self) -> T
    where
        T: Float,
    {
        match self {
            FloatBoundary::Guarded { epsilons } => {
                let scale = <T as NumCast>::from(epsilons).unwrap_or_else(T::zero);
                (scale * T::epsilon() * T::max_value()).min(T::max_value())
            }
            FloatBoundary::Representable | FloatBoundary::Legacy => T::zero(),
        }
    }

    /// Returns `true` if this is the legacy comparison policy.
    #[inline]
    pub fn is_legacy(self) -> bool {
        matches!(self, FloatBoundary::Legacy)
    }
}

impl std::fmt::Display for FloatBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FloatBoundary::Representable => write!(f, "Representable"),
            FloatBoundary::Legacy => write!(f, "Legacy"),
            FloatBoundary::Guarded { epsilons } => write!(f, "Guarded({} epsilons)", epsilons),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_representable() {
        assert_eq!(FloatBoundary::default(), FloatBoundary::Representable);
        assert!(!FloatBoundary::default().is_legacy());
        assert!(FloatBoundary::Legacy.is_legacy());
    }

    #[test]
    fn test_guard_band_zero_for_exact_policies() {
        assert_eq!(FloatBoundary::Representable.guard_band::<f32>(), 0.0);
        assert_eq!(FloatBoundary::Legacy.guard_band::<f64>(), 0.0);
        assert_eq!(
            FloatBoundary::Guarded { epsilons: 0 }.guard_band::<f64>(),
            0.0
        );
    }

    #[test]
    fn test_guard_band_scales_with_epsilons() {
        let one: f64 = FloatBoundary::Guarded { epsilons: 1 }.guard_band();
        let four: f64 = FloatBoundary::Guarded { epsilons: 4 }.guard_band();
        assert_eq!(one, f64::EPSILON * f64::MAX);
        assert_eq!(four, 4.0 * one);
        assert!(four < f64::MAX);
    }

    #[test]
    fn test_guard_band_is_clamped_to_max() {
        // u32::MAX * f32::EPSILON is far above one.
        let band: f32 = FloatBoundary::Guarded { epsilons: u32::MAX }.guard_band();
        assert_eq!(band, f32::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(FloatBoundary::Representable.to_string(), "Representable");
        assert_eq!(FloatBoundary::Legacy.to_string(), "Legacy");
        assert_eq!(
            FloatBoundary::Guarded { epsilons: 3 }.to_string(),
            "Guarded(3 epsilons)"
        );
    }
}
