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

use crate::state::Operation;
use overstep_core::num::domain::{BoundaryKind, BoundedNumeric};

/// A stepping run stopped because its next step would have left the domain.
///
/// The accumulator is the last in-range value; the step that would have
/// crossed the bound was never committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryError<T> {
    kind: BoundaryKind,
    operation: Operation,
    step: u64,
    steps: u64,
    accumulator: T,
    delta: T,
    bound: T,
}

impl<T> BoundaryError<T>
where
    T: BoundedNumeric,
{
    /// Creates a new `BoundaryError`. `step` is the 1-based index of the
    /// rejected step out of `steps`.
    #[inline]
    pub fn new(
        kind: BoundaryKind,
        operation: Operation,
        step: u64,
        steps: u64,
        accumulator: T,
        delta: T,
    ) -> Self {
        debug_assert!(
            step >= 1 && step <= steps,
            "called `BoundaryError::new` with step {} out of 1..={}",
            step,
            steps
        );

        Self {
            kind,
            operation,
            step,
            steps,
            accumulator,
            delta,
            bound: T::bound(kind),
        }
    }

    #[inline]
    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The name of the numeric domain, e.g. `"u16"`.
    #[inline]
    pub fn domain(&self) -> &'static str {
        T::NAME
    }

    /// The 1-based index of the step that was rejected.
    #[inline]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// The number of steps the run was asked to perform.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// The number of steps committed before the rejection.
    #[inline]
    pub fn steps_committed(&self) -> u64 {
        self.step - 1
    }

    /// The last in-range value of the accumulator.
    #[inline]
    pub fn accumulator(&self) -> T {
        self.accumulator
    }

    #[inline]
    pub fn delta(&self) -> T {
        self.delta
    }

    /// The domain bound the rejected step would have crossed.
    #[inline]
    pub fn bound(&self) -> T {
        self.bound
    }
}

impl<T> std::fmt::Display for BoundaryError<T>
where
    T: BoundedNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let crossing = match self.kind {
            BoundaryKind::Overflow => "exceed maximum",
            BoundaryKind::Underflow => "fall below minimum",
        };
        write!(
            f,
            "{} in {} at step {} of {}: {} {} {} would {} {}",
            self.kind,
            T::NAME,
            self.step,
            self.steps,
            self.accumulator.render(),
            self.operation.symbol(),
            self.delta.render(),
            crossing,
            self.bound.render()
        )
    }
}

impl<T> std::error::Error for BoundaryError<T> where T: BoundedNumeric {}
