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

//! Step monitoring interface
//!
//! Declares the `StepMonitor` trait for observing a stepping run.
//!
//! Lifecycle
//! - enter → step* → (breach)? → exit
//! - `on_step` fires once per committed step, after the accumulator moved.
//! - `on_breach` fires at most once, for the rejected step, before `on_exit`.
//! - `StepStatistics` is provided to every callback after the enter event.
//!
//! Generic over `T: BoundedNumeric` (the stepped domain).

use crate::{error::BoundaryError, state::Operation, stats::StepStatistics};
use overstep_core::num::domain::BoundedNumeric;

/// Trait for observing the progress of a stepping run.
pub trait StepMonitor<T>
where
    T: BoundedNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once before the first step is checked.
    fn on_enter(&mut self, operation: Operation, start: T, delta: T, steps: u64);
    /// Called after step number `step` (1-based) was committed.
    fn on_step(&mut self, step: u64, accumulator: T, statistics: &StepStatistics);
    /// Called when a step is rejected at a domain bound.
    fn on_breach(&mut self, error: &BoundaryError<T>, statistics: &StepStatistics);
    /// Called once when the run reaches a terminal state.
    fn on_exit(&mut self, statistics: &StepStatistics);
}

impl<T> std::fmt::Debug for dyn StepMonitor<T> + '_
where
    T: BoundedNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StepMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn StepMonitor<T> + '_
where
    T: BoundedNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StepMonitor({})", self.name())
    }
}

impl<T, M> StepMonitor<T> for &mut M
where
    T: BoundedNumeric,
    M: StepMonitor<T> + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter(&mut self, operation: Operation, start: T, delta: T, steps: u64) {
        (**self).on_enter(operation, start, delta, steps);
    }

    #[inline(always)]
    fn on_step(&mut self, step: u64, accumulator: T, statistics: &StepStatistics) {
        (**self).on_step(step, accumulator, statistics);
    }

    #[inline(always)]
    fn on_breach(&mut self, error: &BoundaryError<T>, statistics: &StepStatistics) {
        (**self).on_breach(error, statistics);
    }

    #[inline(always)]
    fn on_exit(&mut self, statistics: &StepStatistics) {
        (**self).on_exit(statistics);
    }
}
