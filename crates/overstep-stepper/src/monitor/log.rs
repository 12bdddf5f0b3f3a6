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
use std::io::{self, Stdout, Write};
use std::time::Instant;

const RULE_WIDTH: usize = 42;

/// A monitor that writes a human-readable trace of a stepping run.
///
/// Prints a header on enter, one row per `interval` committed steps (the last
/// requested step is always printed), the rejection diagnostic if any, and a
/// footer with the final state.
///
/// Write failures do not interrupt the run. The first one is kept and can be
/// retrieved with `take_error`.
#[derive(Debug)]
pub struct LogMonitor<T, W = Stdout>
where
    T: BoundedNumeric,
    W: Write,
{
    sink: W,
    interval: u64,
    start_time: Instant,
    error: Option<io::Error>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> LogMonitor<T, Stdout>
where
    T: BoundedNumeric,
{
    /// Creates a `LogMonitor` writing every step to standard output.
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }
}

impl<T> Default for LogMonitor<T, Stdout>
where
    T: BoundedNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> LogMonitor<T, W>
where
    T: BoundedNumeric,
    W: Write,
{
    /// Creates a `LogMonitor` writing every step to `sink`.
    pub fn with_sink(sink: W) -> Self {
        Self {
            sink,
            interval: 1,
            start_time: Instant::now(),
            error: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Only every `interval`-th step is printed. An interval of zero is
    /// treated as one.
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval.max(1);
        self
    }

    #[inline]
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Returns the first write error encountered, if any, and clears it.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Consumes the monitor and returns its sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn emit(&mut self, line: String) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.sink, "{}", line) {
            self.error = Some(e);
        }
    }

    fn row(step: &str, accumulator: &str) -> String {
        format!("{:<12} | {:<26}", step, accumulator)
    }
}

impl<T, W> std::fmt::Display for LogMonitor<T, W>
where
    T: BoundedNumeric,
    W: Write,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(interval: {})", self.interval)
    }
}

impl<T, W> StepMonitor<T> for LogMonitor<T, W>
where
    T: BoundedNumeric,
    W: Write,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter(&mut self, operation: Operation, start: T, delta: T, steps: u64) {
        self.start_time = Instant::now();
        self.emit(format!(
            "{} in {}: start {}, delta {}, {} steps",
            operation,
            T::NAME,
            start.render(),
            delta.render(),
            steps
        ));
        self.emit(Self::row("Step", "Accumulator"));
        self.emit("-".repeat(RULE_WIDTH));
    }

    fn on_step(&mut self, step: u64, accumulator: T, statistics: &StepStatistics) {
        if step % self.interval == 0 || step == statistics.steps_requested {
            self.emit(Self::row(&step.to_string(), &accumulator.render()));
        }
    }

    fn on_breach(&mut self, error: &BoundaryError<T>, _statistics: &StepStatistics) {
        self.emit(format!("{:<12} | {}", error.step(), error));
    }

    fn on_exit(&mut self, statistics: &StepStatistics) {
        let elapsed = self.start_time.elapsed();
        self.emit("-".repeat(RULE_WIDTH));
        self.emit(format!(
            "{} after {}/{} steps in {:.1?}",
            statistics.final_state, statistics.steps_committed, statistics.steps_requested, elapsed
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StepState;
    use overstep_core::num::domain::BoundaryKind;

    fn run_success(monitor: &mut LogMonitor<u8, Vec<u8>>) {
        let mut stats = StepStatistics::new(3);
        monitor.on_enter(Operation::Add, 0, 10, 3);
        for (step, acc) in [(1, 10u8), (2, 20), (3, 30)] {
            stats.on_step_committed();
            monitor.on_step(step, acc, &stats);
        }
        stats.on_finish(StepState::Succeeded);
        monitor.on_exit(&stats);
    }

    #[test]
    fn test_trace_of_successful_run() {
        let mut monitor: LogMonitor<u8, Vec<u8>> = LogMonitor::with_sink(Vec::new());
        run_success(&mut monitor);
        assert!(monitor.take_error().is_none());

        let text = String::from_utf8(monitor.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Add in u8: start 0, delta 10, 3 steps");
        assert!(lines[1].starts_with("Step         | Accumulator"));
        assert_eq!(lines[2], "-".repeat(RULE_WIDTH));
        assert!(lines[3].starts_with("1            | 10"));
        assert!(lines[5].starts_with("3            | 30"));
        assert_eq!(lines[6], "-".repeat(RULE_WIDTH));
        assert!(lines[7].starts_with("Succeeded after 3/3 steps in "));
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_interval_skips_rows_but_keeps_last() {
        let mut monitor: LogMonitor<u8, Vec<u8>> =
            LogMonitor::with_sink(Vec::new()).with_interval(2);
        assert_eq!(monitor.interval(), 2);
        run_success(&mut monitor);

        let text = String::from_utf8(monitor.into_inner()).unwrap();
        assert!(!text.contains("\n1            |"));
        assert!(text.contains("\n2            | 20"));
        assert!(text.contains("\n3            | 30"));
    }

    #[test]
    fn test_zero_interval_is_one() {
        let monitor = LogMonitor::<i32, Vec<u8>>::with_sink(Vec::new()).with_interval(0);
        assert_eq!(monitor.interval(), 1);
        assert_eq!(monitor.to_string(), "LogMonitor(interval: 1)");
    }

    #[test]
    fn test_breach_line() {
        let mut monitor: LogMonitor<u8, Vec<u8>> = LogMonitor::with_sink(Vec::new());
        let mut stats = StepStatistics::new(2);
        monitor.on_enter(Operation::Subtract, 5u8, 4, 2);
        stats.on_step_committed();
        monitor.on_step(1, 1, &stats);
        let error = BoundaryError::new(BoundaryKind::Underflow, Operation::Subtract, 2, 2, 1u8, 4);
        monitor.on_breach(&error, &stats);
        stats.on_finish(StepState::FailedUnderflow);
        monitor.on_exit(&stats);

        let text = String::from_utf8(monitor.into_inner()).unwrap();
        assert!(text.contains(
            "2            | Underflow in u8 at step 2 of 2: 1 - 4 would fall below minimum 0"
        ));
        assert!(text.contains("Failed (underflow) after 1/2 steps in "));
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_kept() {
        let mut monitor = LogMonitor::<u8, FailingSink>::with_sink(FailingSink);
        monitor.on_enter(Operation::Add, 0, 1, 1);
        let error = monitor.take_error().expect("write error should be recorded");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        assert!(monitor.take_error().is_none());
    }
}
