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
    error::BoundaryError,
    monitor::step_monitor::StepMonitor,
    state::{Operation, StepState},
    stats::StepStatistics,
};
use overstep_core::num::domain::{BoundaryKind, BoundedNumeric};

/// A single observation made by a `RecordingMonitor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepEvent<T> {
    Enter {
        operation: Operation,
        start: T,
        delta: T,
        steps: u64,
    },
    Step {
        step: u64,
        accumulator: T,
    },
    Breach {
        kind: BoundaryKind,
        step: u64,
    },
    Exit {
        state: StepState,
    },
}

/// A monitor that keeps every event of the runs it observes, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordingMonitor<T> {
    events: Vec<StepEvent<T>>,
}

impl<T> RecordingMonitor<T>
where
    T: BoundedNumeric,
{
    #[inline]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    #[inline]
    pub fn events(&self) -> &[StepEvent<T>] {
        &self.events
    }

    #[inline]
    pub fn into_events(self) -> Vec<StepEvent<T>> {
        self.events
    }

    /// The accumulator values of all committed steps, in order.
    pub fn committed_values(&self) -> impl Iterator<Item = T> + '_ {
        self.events.iter().filter_map(|event| match event {
            StepEvent::Step { accumulator, .. } => Some(*accumulator),
            _ => None,
        })
    }

    /// The terminal state of the most recent run, if it has ended.
    pub fn last_state(&self) -> Option<StepState> {
        self.events.iter().rev().find_map(|event| match event {
            StepEvent::Exit { state } => Some(*state),
            _ => None,
        })
    }

    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> StepMonitor<T> for RecordingMonitor<T>
where
    T: BoundedNumeric,
{
    fn name(&self) -> &str {
        "RecordingMonitor"
    }

    fn on_enter(&mut self, operation: Operation, start: T, delta: T, steps: u64) {
        self.events.push(StepEvent::Enter {
            operation,
            start,
            delta,
            steps,
        });
    }

    fn on_step(&mut self, step: u64, accumulator: T, _statistics: &StepStatistics) {
        self.events.push(StepEvent::Step { step, accumulator });
    }

    fn on_breach(&mut self, error: &BoundaryError<T>, _statistics: &StepStatistics) {
        self.events.push(StepEvent::Breach {
            kind: error.kind(),
            step: error.step(),
        });
    }

    fn on_exit(&mut self, statistics: &StepStatistics) {
        self.events.push(StepEvent::Exit {
            state: statistics.final_state,
        });
    }
}
