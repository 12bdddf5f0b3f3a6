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

//! Monitoring combinator for stepping runs
//!
//! Provides `CompositeMonitor`, a fan‑out monitor that forwards every event
//! to its children. This lets you mix a console trace with a recorder (or any
//! other observer) without coupling them to the stepper.
//!
//! Events are dispatched to child monitors in insertion order.

use crate::{
    error::BoundaryError, monitor::step_monitor::StepMonitor, state::Operation,
    stats::StepStatistics,
};
use overstep_core::num::domain::BoundedNumeric;

/// A step monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeMonitor<'a, T>
where
    T: BoundedNumeric,
{
    monitors: Vec<Box<dyn StepMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: BoundedNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: BoundedNumeric,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: StepMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn StepMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn StepMonitor<T> + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn StepMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: BoundedNumeric,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn StepMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: BoundedNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.monitors.iter()).finish()
    }
}

impl<'a, T> StepMonitor<T> for CompositeMonitor<'a, T>
where
    T: BoundedNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    #[inline(always)]
    fn on_enter(&mut self, operation: Operation, start: T, delta: T, steps: u64) {
        for monitor in &mut self.monitors {
            monitor.on_enter(operation, start, delta, steps);
        }
    }

    #[inline(always)]
    fn on_step(&mut self, step: u64, accumulator: T, statistics: &StepStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_step(step, accumulator, statistics);
        }
    }

    #[inline(always)]
    fn on_breach(&mut self, error: &BoundaryError<T>, statistics: &StepStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_breach(error, statistics);
        }
    }

    #[inline(always)]
    fn on_exit(&mut self, statistics: &StepStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit(statistics);
        }
    }
}
