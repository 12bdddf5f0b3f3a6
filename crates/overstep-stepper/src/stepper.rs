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

//! Bounded stepping
//!
//! `BoundedStepper` applies a fixed delta `steps` times and stops at the
//! first step that would leave the numeric domain. The check happens before
//! the step is committed, so the accumulator only ever holds in-range values
//! and a failed run returns a `BoundaryError` rather than a partial result.
//!
//! The free functions `bounded_add` and `bounded_subtract` run the default
//! stepper without a monitor.

use crate::{
    error::BoundaryError,
    monitor::{no_op::NoOperationMonitor, step_monitor::StepMonitor},
    state::{Operation, StepState},
    stats::StepStatistics,
};
use overstep_core::num::{boundary::FloatBoundary, domain::BoundedNumeric};

/// Computes `start + increment * steps`, one checked step at a time.
///
/// Fails with `BoundaryKind::Overflow` at the first step that would exceed
/// the domain maximum. A negative increment moves towards the minimum and
/// fails with `BoundaryKind::Underflow` instead. `steps == 0` returns
/// `start`.
///
/// # Examples
///
/// ```rust
/// # use overstep_core::num::domain::BoundaryKind;
/// # use overstep_stepper::stepper::bounded_add;
/// let increment = i32::MAX / 5;
/// assert_eq!(bounded_add(0, increment, 5), Ok(5 * increment));
///
/// let error = bounded_add(0, increment, 6).unwrap_err();
/// assert_eq!(error.kind(), BoundaryKind::Overflow);
/// assert_eq!(error.step(), 6);
/// ```
#[inline]
pub fn bounded_add<T>(start: T, increment: T, steps: u64) -> Result<T, BoundaryError<T>>
where
    T: BoundedNumeric,
{
    BoundedStepper::new().add_unmonitored(start, increment, steps)
}

/// Computes `start - decrement * steps`, one checked step at a time.
///
/// Fails with `BoundaryKind::Underflow` at the first step that would go below
/// the domain minimum. A negative decrement moves towards the maximum and
/// fails with `BoundaryKind::Overflow` instead. `steps == 0` returns
/// `start`.
///
/// # Examples
///
/// ```rust
/// # use overstep_core::num::domain::BoundaryKind;
/// # use overstep_stepper::stepper::bounded_subtract;
/// let decrement = u32::MAX / 5;
/// assert_eq!(bounded_subtract(u32::MAX, decrement, 5), Ok(0));
///
/// let error = bounded_subtract(u32::MAX, decrement, 11).unwrap_err();
/// assert_eq!(error.kind(), BoundaryKind::Underflow);
/// assert_eq!(error.step(), 6);
/// assert_eq!(error.accumulator(), 0);
/// ```
#[inline]
pub fn bounded_subtract<T>(start: T, decrement: T, steps: u64) -> Result<T, BoundaryError<T>>
where
    T: BoundedNumeric,
{
    BoundedStepper::new().subtract_unmonitored(start, decrement, steps)
}

/// A configurable stepping engine.
///
/// The only setting is the `FloatBoundary` policy, which floating-point
/// domains consult near their bounds; integral domains ignore it.
///
/// # Examples
///
/// ```rust
/// # use overstep_core::num::boundary::FloatBoundary;
/// # use overstep_stepper::stepper::BoundedStepper;
/// let increment = f64::MAX / 5.0;
///
/// let exact = BoundedStepper::new();
/// assert_eq!(exact.add_unmonitored(0.0, increment, 5), Ok(f64::MAX));
///
/// let legacy = BoundedStepper::new().float_boundary(FloatBoundary::Legacy);
/// assert!(legacy.add_unmonitored(0.0, increment, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundedStepper {
    float_boundary: FloatBoundary,
}

impl BoundedStepper {
    /// Creates a new `BoundedStepper` with the default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy used for floating-point steps near a domain bound.
    #[inline]
    pub fn float_boundary(mut self, boundary: FloatBoundary) -> Self {
        self.float_boundary = boundary;
        self
    }

    /// Returns the configured floating-point boundary policy.
    #[inline]
    pub fn boundary(&self) -> FloatBoundary {
        self.float_boundary
    }

    /// Computes `start + increment * steps`, reporting progress to `monitor`.
    #[inline]
    pub fn add<T, M>(
        &self,
        start: T,
        increment: T,
        steps: u64,
        monitor: &mut M,
    ) -> Result<T, BoundaryError<T>>
    where
        T: BoundedNumeric,
        M: StepMonitor<T> + ?Sized,
    {
        StepSession::new(self.float_boundary, Operation::Add, start, increment, steps, monitor)
            .run()
    }

    /// Computes `start - decrement * steps`, reporting progress to `monitor`.
    #[inline]
    pub fn subtract<T, M>(
        &self,
        start: T,
        decrement: T,
        steps: u64,
        monitor: &mut M,
    ) -> Result<T, BoundaryError<T>>
    where
        T: BoundedNumeric,
        M: StepMonitor<T> + ?Sized,
    {
        StepSession::new(
            self.float_boundary,
            Operation::Subtract,
            start,
            decrement,
            steps,
            monitor,
        )
        .run()
    }

    /// Same as `add`, without observation.
    #[inline]
    pub fn add_unmonitored<T>(
        &self,
        start: T,
        increment: T,
        steps: u64,
    ) -> Result<T, BoundaryError<T>>
    where
        T: BoundedNumeric,
    {
        self.add(start, increment, steps, &mut NoOperationMonitor::new())
    }

    /// Same as `subtract`, without observation.
    #[inline]
    pub fn subtract_unmonitored<T>(
        &self,
        start: T,
        decrement: T,
        steps: u64,
    ) -> Result<T, BoundaryError<T>>
    where
        T: BoundedNumeric,
    {
        self.subtract(start, decrement, steps, &mut NoOperationMonitor::new())
    }
}

impl std::fmt::Display for BoundedStepper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundedStepper(float_boundary: {})", self.float_boundary)
    }
}

/// One stepping run: the inputs, the monitor and the running statistics.
struct StepSession<'m, T, M>
where
    T: BoundedNumeric,
    M: StepMonitor<T> + ?Sized,
{
    boundary: FloatBoundary,
    operation: Operation,
    start: T,
    delta: T,
    steps: u64,
    monitor: &'m mut M,
    stats: StepStatistics,
}

impl<'m, T, M> StepSession<'m, T, M>
where
    T: BoundedNumeric,
    M: StepMonitor<T> + ?Sized,
{
    #[inline]
    fn new(
        boundary: FloatBoundary,
        operation: Operation,
        start: T,
        delta: T,
        steps: u64,
        monitor: &'m mut M,
    ) -> Self {
        Self {
            boundary,
            operation,
            start,
            delta,
            steps,
            monitor,
            stats: StepStatistics::new(steps),
        }
    }

    #[inline(always)]
    fn step(&self, accumulator: T) -> Result<T, overstep_core::num::domain::BoundaryKind> {
        match self.operation {
            Operation::Add => accumulator.try_add_step(self.delta, self.boundary),
            Operation::Subtract => accumulator.try_sub_step(self.delta, self.boundary),
        }
    }

    fn run(mut self) -> Result<T, BoundaryError<T>> {
        self.monitor
            .on_enter(self.operation, self.start, self.delta, self.steps);

        let mut accumulator = self.start;
        for index in 1..=self.steps {
            match self.step(accumulator) {
                Ok(next) => {
                    accumulator = next;
                    self.stats.on_step_committed();
                    self.monitor.on_step(index, accumulator, &self.stats);
                }
                Err(kind) => {
                    let error = BoundaryError::new(
                        kind,
                        self.operation,
                        index,
                        self.steps,
                        accumulator,
                        self.delta,
                    );
                    self.stats.on_finish(StepState::from(kind));
                    self.monitor.on_breach(&error, &self.stats);
                    self.monitor.on_exit(&self.stats);
                    return Err(error);
                }
            }
        }

        self.stats.on_finish(StepState::Succeeded);
        self.monitor.on_exit(&self.stats);
        Ok(accumulator)
    }
}
