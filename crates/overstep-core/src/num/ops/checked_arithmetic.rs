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

use core::ops::Sub;

/// A trait for types that support checked subtraction by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_sub`, but provides
/// a trait-based API that does not take references (unlike `num_traits::CheckedSub`).
/// The stepping checks use it to compute `MAX - accumulator`, which is not
/// representable when a signed accumulator is negative.
///
/// # Examples
///
/// ```rust
/// # use overstep_core::num::ops::checked_arithmetic::CheckedSubVal;
///
/// let a: u8 = 50;
/// let b: u8 = 100;
/// assert_eq!(a.checked_sub_val(b), None); // Underflow occurs
/// let c: u8 = 20;
/// assert_eq!(a.checked_sub_val(c), Some(30)); // No underflow
///
/// // The headroom above a negative accumulator does not fit in the type.
/// assert_eq!(i8::MAX.checked_sub_val(-1), None);
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if the result
    /// lies outside the bounds of the type.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                <$t>::$src_method(self, v)
            }
        }
    };
}

checked_impl_val!(CheckedSubVal, checked_sub_val, u8, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u16, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u32, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u64, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, usize, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, u128, checked_sub);

checked_impl_val!(CheckedSubVal, checked_sub_val, i8, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i16, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i32, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i64, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, isize, checked_sub);
checked_impl_val!(CheckedSubVal, checked_sub_val, i128, checked_sub);

#[cfg(test)]
mod tests {
    use super::*;

    fn headroom<T>(max: T, acc: T) -> Option<T>
    where
        T: CheckedSubVal,
    {
        max.checked_sub_val(acc)
    }

    #[test]
    fn test_unsigned_headroom_is_always_representable() {
        assert_eq!(headroom(u8::MAX, 0), Some(255));
        assert_eq!(headroom(u8::MAX, 255), Some(0));
        assert_eq!(headroom(u64::MAX, 1), Some(u64::MAX - 1));
    }

    #[test]
    fn test_signed_headroom_overflows_below_zero() {
        assert_eq!(headroom(i8::MAX, 0), Some(127));
        assert_eq!(headroom(i8::MAX, 100), Some(27));
        assert_eq!(headroom(i8::MAX, -1), None);
        assert_eq!(headroom(i32::MAX, i32::MIN), None);
    }

    #[test]
    fn test_matches_inherent_checked_sub() {
        for a in i8::MIN..=i8::MAX {
            for b in [i8::MIN, -1, 0, 1, i8::MAX] {
                assert_eq!(a.checked_sub_val(b), a.checked_sub(b));
            }
        }
    }
}
