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

use crate::{
    error::BoundaryError, monitor::step_monitor::StepMonitor, state::Operation,
    stats::StepStatistics,
};
use overstep_core::num::domain::BoundedNumeric;

/// A no-operation monitor that implements the `StepMonitor` trait
/// but does nothing on any of the events.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor<T>
where
    T: BoundedNumeric,
{
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T>
where
    T: BoundedNumeric,
{
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> StepMonitor<T> for NoOperationMonitor<T>
where
    T: BoundedNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter(&mut self, _operation: Operation, _start: T, _delta: T, _steps: u64) {}

    #[inline(always)]
    fn on_step(&mut self, _step: u64, _accumulator: T, _statistics: &StepStatistics) {}

    #[inline(always)]
    fn on_breach(&mut self, _error: &BoundaryError<T>, _statistics: &StepStatistics) {}

    #[inline(always)]
    fn on_exit(&mut self, _statistics: &StepStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_dyn_format() {
        let monitor = NoOperationMonitor::<u16>::new();
        assert_eq!(monitor.name(), "NoOperationMonitor");
        let as_dyn: &dyn StepMonitor<u16> = &monitor;
        assert_eq!(format!("{}", as_dyn), "StepMonitor(NoOperationMonitor)");
        assert_eq!(format!("{:?}", as_dyn), "StepMonitor(NoOperationMonitor)");
    }
}
