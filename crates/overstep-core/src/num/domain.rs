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

//! # Bounded Numeric Domains
//!
//! `BoundedNumeric` is the capability interface every steppable type
//! implements: its bounds, its category, and one checked step in either
//! direction. Implementations are generated per category:
//!
//! - Integral domains check the headroom before committing, so the
//!   committed `acc + inc` / `acc - dec` can never wrap. The overflow test is
//!   `MAX - acc < inc` and the underflow test is `acc < dec + MIN`. The
//!   latter never computes `acc - dec` directly, which would wrap for
//!   unsigned domains.
//! - Floating-point domains compute the rounded candidate and judge it with
//!   a `FloatBoundary` policy.
//!
//! A negative increment (or decrement) reverses the direction of travel: it
//! is checked against the opposite bound and reports the opposite
//! `BoundaryKind`.

use crate::num::{boundary::FloatBoundary, ops::checked_arithmetic::CheckedSubVal};
use num_traits::{Float, PrimInt};
use std::fmt::{Debug, Display};

/// The category of a numeric domain, selecting the step algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainCategory {
    /// Fixed-width signed or unsigned integers.
    Integral,
    /// IEEE-754 binary floating-point numbers.
    FloatingPoint,
}

impl std::fmt::Display for DomainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainCategory::Integral => write!(f, "Integral"),
            DomainCategory::FloatingPoint => write!(f, "FloatingPoint"),
        }
    }
}

/// The bound a rejected step would have crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// The step would have produced a value above the domain maximum.
    Overflow,
    /// The step would have produced a value below the domain minimum.
    Underflow,
}

impl std::fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryKind::Overflow => write!(f, "Overflow"),
            BoundaryKind::Underflow => write!(f, "Underflow"),
        }
    }
}

/// A fixed-width numeric domain that can be stepped without leaving its range.
///
/// # Examples
///
/// ```rust
/// # use overstep_core::num::boundary::FloatBoundary;
/// # use overstep_core::num::domain::{BoundaryKind, BoundedNumeric, DomainCategory};
/// let policy = FloatBoundary::default();
///
/// assert_eq!(<u8 as BoundedNumeric>::CATEGORY, DomainCategory::Integral);
/// assert_eq!(250u8.try_add_step(5, policy), Ok(255));
/// assert_eq!(250u8.try_add_step(6, policy), Err(BoundaryKind::Overflow));
/// assert_eq!(5u8.try_sub_step(6, policy), Err(BoundaryKind::Underflow));
///
/// assert_eq!(f64::MAX.try_add_step(f64::MAX, policy), Err(BoundaryKind::Overflow));
/// ```
pub trait BoundedNumeric: Copy + PartialOrd + Debug + Display {
    /// Which step algorithm applies to this domain.
    const CATEGORY: DomainCategory;
    /// The Rust name of the type, e.g. `"i32"`.
    const NAME: &'static str;

    /// The largest representable value.
    fn maximum() -> Self;

    /// The smallest representable value. For floating-point domains this is
    /// the lowest finite value (`-MAX`), not the smallest positive normal.
    fn minimum() -> Self;

    /// The additive identity.
    fn zero() -> Self;

    /// Returns `self + increment` if the result stays within the domain.
    fn try_add_step(self, increment: Self, boundary: FloatBoundary) -> Result<Self, BoundaryKind>;

    /// Returns `self - decrement` if the result stays within the domain.
    fn try_sub_step(self, decrement: Self, boundary: FloatBoundary) -> Result<Self, BoundaryKind>;

    /// Formats the value for diagnostics. Floats of large magnitude use
    /// scientific notation.
    fn render(self) -> String;

    /// Returns the bound associated with a breach of the given kind.
    #[inline]
    fn bound(kind: BoundaryKind) -> Self {
        match kind {
            BoundaryKind::Overflow => Self::maximum(),
            BoundaryKind::Underflow => Self::minimum(),
        }
    }
}

#[inline]
fn integral_add_step<T>(acc: T, increment: T) -> Result<T, BoundaryKind>
where
    T: PrimInt + CheckedSubVal,
{
    if increment >= T::zero() {
        // `None` means the headroom exceeds `T::max_value()`, which only
        // happens for negative accumulators.
        match T::max_value().checked_sub_val(acc) {
            Some(headroom) if headroom < increment => Err(BoundaryKind::Overflow),
            _ => Ok(acc + increment),
        }
    } else if acc < T::min_value() - increment {
        Err(BoundaryKind::Underflow)
    } else {
        Ok(acc + increment)
    }
}

#[inline]
fn integral_sub_step<T>(acc: T, decrement: T) -> Result<T, BoundaryKind>
where
    T: PrimInt,
{
    if decrement >= T::zero() {
        if acc < decrement + T::min_value() {
            Err(BoundaryKind::Underflow)
        } else {
            Ok(acc - decrement)
        }
    } else if acc > T::max_value() + decrement {
        Err(BoundaryKind::Overflow)
    } else {
        Ok(acc - decrement)
    }
}

#[inline(always)]
fn breach(ascending: bool) -> BoundaryKind {
    if ascending {
        BoundaryKind::Overflow
    } else {
        BoundaryKind::Underflow
    }
}

#[inline]
fn commit_float<T>(
    candidate: T,
    ascending: bool,
    boundary: FloatBoundary,
) -> Result<T, BoundaryKind>
where
    T: Float,
{
    if !candidate.is_finite() {
        return Err(breach(ascending));
    }
    // Only the bound the step moves towards is guarded.
    let band = boundary.guard_band::<T>();
    let inside_band = if ascending {
        candidate > T::max_value() - band
    } else {
        candidate < T::min_value() + band
    };
    if inside_band {
        Err(breach(ascending))
    } else {
        Ok(candidate)
    }
}

#[inline]
fn float_add_step<T>(acc: T, increment: T, boundary: FloatBoundary) -> Result<T, BoundaryKind>
where
    T: Float,
{
    let ascending = increment >= T::zero() || increment.is_nan();
    if boundary.is_legacy() {
        let blocked = if ascending {
            T::max_value() - acc <= increment
        } else {
            acc < T::min_value() - increment
        };
        if blocked {
            return Err(breach(ascending));
        }
    }
    commit_float(acc + increment, ascending, boundary)
}

#[inline]
fn float_sub_step<T>(acc: T, decrement: T, boundary: FloatBoundary) -> Result<T, BoundaryKind>
where
    T: Float,
{
    let ascending = decrement < T::zero();
    if boundary.is_legacy() {
        let blocked = if ascending {
            acc >= T::max_value() + decrement
        } else {
            acc < decrement + T::min_value()
        };
        if blocked {
            return Err(breach(ascending));
        }
    }
    commit_float(acc - decrement, ascending, boundary)
}

macro_rules! impl_integral_domain {
    ($t:ty) => {
        impl BoundedNumeric for $t {
            const CATEGORY: DomainCategory = DomainCategory::Integral;
            const NAME: &'static str = stringify!($t);

            #[inline(always)]
            fn maximum() -> Self {
                <$t>::MAX
            }

            #[inline(always)]
            fn minimum() -> Self {
                <$t>::MIN
            }

            #[inline(always)]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn try_add_step(
                self,
                increment: Self,
                _boundary: FloatBoundary,
            ) -> Result<Self, BoundaryKind> {
                integral_add_step(self, increment)
            }

            #[inline]
            fn try_sub_step(
                self,
                decrement: Self,
                _boundary: FloatBoundary,
            ) -> Result<Self, BoundaryKind> {
                integral_sub_step(self, decrement)
            }

            fn render(self) -> String {
                self.to_string()
            }
        }
    };
}

macro_rules! impl_float_domain {
    ($t:ty) => {
        impl BoundedNumeric for $t {
            const CATEGORY: DomainCategory = DomainCategory::FloatingPoint;
            const NAME: &'static str = stringify!($t);

            #[inline(always)]
            fn maximum() -> Self {
                <$t>::MAX
            }

            #[inline(always)]
            fn minimum() -> Self {
                <$t>::MIN
            }

            #[inline(always)]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn try_add_step(
                self,
                increment: Self,
                boundary: FloatBoundary,
            ) -> Result<Self, BoundaryKind> {
                float_add_step(self, increment, boundary)
            }

            #[inline]
            fn try_sub_step(
                self,
                decrement: Self,
                boundary: FloatBoundary,
            ) -> Result<Self, BoundaryKind> {
                float_sub_step(self, decrement, boundary)
            }

            fn render(self) -> String {
                if self.is_finite() && self.abs() < 1e16 {
                    format!("{}", self)
                } else {
                    format!("{:e}", self)
                }
            }
        }
    };
}

impl_integral_domain!(i8);
impl_integral_domain!(i16);
impl_integral_domain!(i32);
impl_integral_domain!(i64);
impl_integral_domain!(i128);
impl_integral_domain!(isize);

impl_integral_domain!(u8);
impl_integral_domain!(u16);
impl_integral_domain!(u32);
impl_integral_domain!(u64);
impl_integral_domain!(u128);
impl_integral_domain!(usize);

impl_float_domain!(f32);
impl_float_domain!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    const EXACT: FloatBoundary = FloatBoundary::Representable;

    #[test]
    fn test_names_and_categories() {
        assert_eq!(<i8 as BoundedNumeric>::NAME, "i8");
        assert_eq!(<usize as BoundedNumeric>::NAME, "usize");
        assert_eq!(<f64 as BoundedNumeric>::NAME, "f64");
        assert_eq!(<u128 as BoundedNumeric>::CATEGORY, DomainCategory::Integral);
        assert_eq!(<f32 as BoundedNumeric>::CATEGORY, DomainCategory::FloatingPoint);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(<i16 as BoundedNumeric>::maximum(), i16::MAX);
        assert_eq!(<i16 as BoundedNumeric>::minimum(), i16::MIN);
        assert_eq!(<u32 as BoundedNumeric>::minimum(), 0);
        assert_eq!(<f32 as BoundedNumeric>::minimum(), -f32::MAX);
        assert_eq!(<i64 as BoundedNumeric>::bound(BoundaryKind::Overflow), i64::MAX);
        assert_eq!(<i64 as BoundedNumeric>::bound(BoundaryKind::Underflow), i64::MIN);
    }

    #[test]
    fn test_integral_add_up_to_max() {
        assert_eq!(100i8.try_add_step(27, EXACT), Ok(127));
        assert_eq!(100i8.try_add_step(28, EXACT), Err(BoundaryKind::Overflow));
        assert_eq!(u8::MAX.try_add_step(0, EXACT), Ok(u8::MAX));
        assert_eq!(u8::MAX.try_add_step(1, EXACT), Err(BoundaryKind::Overflow));
    }

    #[test]
    fn test_integral_add_from_negative_accumulator() {
        // MAX - acc does not fit in i8 here; it must not wrap into a small headroom.
        assert_eq!((-100i8).try_add_step(127, EXACT), Ok(27));
        assert_eq!(i8::MIN.try_add_step(i8::MAX, EXACT), Ok(-1));
        assert_eq!(i32::MIN.try_add_step(i32::MAX, EXACT), Ok(-1));
    }

    #[test]
    fn test_integral_add_negative_increment_moves_down() {
        assert_eq!((-100i8).try_add_step(-28, EXACT), Ok(-128));
        assert_eq!((-100i8).try_add_step(-29, EXACT), Err(BoundaryKind::Underflow));
        assert_eq!(0i8.try_add_step(i8::MIN, EXACT), Ok(i8::MIN));
        assert_eq!((-1i8).try_add_step(i8::MIN, EXACT), Err(BoundaryKind::Underflow));
    }

    #[test]
    fn test_integral_sub_down_to_min() {
        assert_eq!((-103i8).try_sub_step(25, EXACT), Ok(-128));
        assert_eq!((-104i8).try_sub_step(25, EXACT), Err(BoundaryKind::Underflow));
        assert_eq!(51u8.try_sub_step(51, EXACT), Ok(0));
        assert_eq!(50u8.try_sub_step(51, EXACT), Err(BoundaryKind::Underflow));
        assert_eq!(0u64.try_sub_step(1, EXACT), Err(BoundaryKind::Underflow));
    }

    #[test]
    fn test_integral_sub_negative_decrement_moves_up() {
        assert_eq!(117i8.try_sub_step(-10, EXACT), Ok(127));
        assert_eq!(118i8.try_sub_step(-10, EXACT), Err(BoundaryKind::Overflow));
        assert_eq!((-1i8).try_sub_step(i8::MIN, EXACT), Ok(127));
        assert_eq!(0i8.try_sub_step(i8::MIN, EXACT), Err(BoundaryKind::Overflow));
    }

    #[test]
    fn test_integral_ignores_float_policy() {
        for boundary in [
            FloatBoundary::Representable,
            FloatBoundary::Legacy,
            FloatBoundary::Guarded { epsilons: 8 },
        ] {
            assert_eq!(126u8.try_add_step(129, boundary), Ok(255));
            assert_eq!(126u8.try_add_step(130, boundary), Err(BoundaryKind::Overflow));
        }
    }

    #[test]
    fn test_exhaustive_i8_agrees_with_widened_arithmetic() {
        for acc in i8::MIN..=i8::MAX {
            for delta in [i8::MIN, -77, -1, 0, 1, 25, 77, i8::MAX] {
                let sum = acc as i16 + delta as i16;
                let expected_add = if sum > i8::MAX as i16 {
                    Err(BoundaryKind::Overflow)
                } else if sum < i8::MIN as i16 {
                    Err(BoundaryKind::Underflow)
                } else {
                    Ok(sum as i8)
                };
                assert_eq!(acc.try_add_step(delta, EXACT), expected_add, "{acc} + {delta}");

                let diff = acc as i16 - delta as i16;
                let expected_sub = if diff > i8::MAX as i16 {
                    Err(BoundaryKind::Overflow)
                } else if diff < i8::MIN as i16 {
                    Err(BoundaryKind::Underflow)
                } else {
                    Ok(diff as i8)
                };
                assert_eq!(acc.try_sub_step(delta, EXACT), expected_sub, "{acc} - {delta}");
            }
        }
    }

    #[test]
    fn test_float_representable_accepts_landing_on_max() {
        let inc = f64::MAX / 5.0;
        let acc = (0..4).fold(0.0f64, |acc, _| acc + inc);
        assert_eq!(acc.try_add_step(inc, EXACT), Ok(f64::MAX));
        assert_eq!(f64::MAX.try_add_step(inc, EXACT), Err(BoundaryKind::Overflow));
    }

    #[test]
    fn test_float_legacy_rejects_landing_on_max() {
        let inc = f64::MAX / 5.0;
        let acc = (0..4).fold(0.0f64, |acc, _| acc + inc);
        assert_eq!(
            acc.try_add_step(inc, FloatBoundary::Legacy),
            Err(BoundaryKind::Overflow)
        );
        assert_eq!(0.0f64.try_add_step(inc, FloatBoundary::Legacy), Ok(inc));
    }

    #[test]
    fn test_float_sub_checks_lowest_not_smallest_positive() {
        assert_eq!(1.0f32.try_sub_step(2.0, EXACT), Ok(-1.0));
        assert_eq!(1.0f32.try_sub_step(2.0, FloatBoundary::Legacy), Ok(-1.0));
        assert_eq!(f32::MIN.try_sub_step(f32::MAX, EXACT), Err(BoundaryKind::Underflow));
    }

    #[test]
    fn test_float_negative_deltas_reverse_direction() {
        assert_eq!(f64::MIN.try_add_step(-f64::MAX, EXACT), Err(BoundaryKind::Underflow));
        assert_eq!(f64::MAX.try_sub_step(-f64::MAX, EXACT), Err(BoundaryKind::Overflow));
        assert_eq!(
            f64::MAX.try_sub_step(-f64::MAX, FloatBoundary::Legacy),
            Err(BoundaryKind::Overflow)
        );
        assert_eq!(2.0f64.try_sub_step(-3.0, FloatBoundary::Legacy), Ok(5.0));
    }

    #[test]
    fn test_float_nan_is_rejected() {
        assert_eq!(1.0f64.try_add_step(f64::NAN, EXACT), Err(BoundaryKind::Overflow));
        assert_eq!(f64::NAN.try_sub_step(1.0, EXACT), Err(BoundaryKind::Underflow));
        assert_eq!(
            f32::NAN.try_add_step(1.0, FloatBoundary::Legacy),
            Err(BoundaryKind::Overflow)
        );
    }

    #[test]
    fn test_float_infinite_accumulator_is_rejected() {
        assert_eq!(f64::INFINITY.try_add_step(0.0, EXACT), Err(BoundaryKind::Overflow));
        assert_eq!(
            f64::NEG_INFINITY.try_sub_step(0.0, EXACT),
            Err(BoundaryKind::Underflow)
        );
    }

    #[test]
    fn test_float_guarded_band() {
        let guarded = FloatBoundary::Guarded { epsilons: 4 };
        let band: f64 = guarded.guard_band();
        assert_eq!(0.0f64.try_add_step(1.0, guarded), Ok(1.0));
        assert_eq!(
            (f64::MAX - 2.0 * band).try_add_step(2.0 * band, guarded),
            Err(BoundaryKind::Overflow)
        );
        assert_eq!(
            (f64::MIN + 2.0 * band).try_sub_step(2.0 * band, guarded),
            Err(BoundaryKind::Underflow)
        );
    }

    #[test]
    fn test_float_guarded_band_only_applies_towards_the_approached_bound() {
        let guarded = FloatBoundary::Guarded { epsilons: 4 };
        assert_eq!((-f64::MAX).try_add_step(1.0, guarded), Ok(-f64::MAX));
        assert_eq!((-f64::MAX + 1.0).try_add_step(1.0, guarded), Ok(-f64::MAX));
        assert_eq!(f64::MAX.try_sub_step(1.0, guarded), Ok(f64::MAX));
        assert_eq!((-f32::MAX).try_sub_step(-1.0, guarded), Ok(-f32::MAX));
        assert_eq!(f32::MAX.try_add_step(-1.0, guarded), Ok(f32::MAX));

        // Moving towards the bound inside the band still breaches in that direction.
        assert_eq!(
            (-f64::MAX).try_add_step(-1.0, guarded),
            Err(BoundaryKind::Underflow)
        );
        assert_eq!(f64::MAX.try_sub_step(-1.0, guarded), Err(BoundaryKind::Overflow));
    }

    #[test]
    fn test_render() {
        assert_eq!((-42i32).render(), "-42");
        assert_eq!(u128::MAX.render(), "340282366920938463463374607431768211455");
        assert_eq!(0.0f32.render(), "0");
        assert_eq!(2.5f64.render(), "2.5");
        assert_eq!(f64::MAX.render(), "1.7976931348623157e308");
        assert_eq!(f32::MAX.render(), "3.4028235e38");
        assert_eq!(f64::NAN.render(), "NaN");
    }
}
