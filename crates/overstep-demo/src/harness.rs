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

//! Demonstration harness
//!
//! `Harness::run` writes the full report to any `std::io::Write` sink. Each
//! domain gets an overflow scenario (`0 + (MAX / n) * n`, then `n + 1` steps)
//! and an underflow scenario (`MAX - (MAX / n) * n`, then `2n + 1` steps).
//! The underflow scenario needs `2n + 1` steps because a signed domain can
//! take `2n` steps of `MAX / n` from `MAX` before it reaches `MIN`.
//!
//! When `MAX / n` truncates enough that the nominal count stays in range,
//! the overstepping scenario runs to the first step that does cross, and
//! that step count is the one printed.
//!
//! A breach is part of the report, never an error. `HarnessError` is
//! reserved for a failing sink and for step counts the harness cannot use.

use num_traits::NumCast;
use overstep_core::num::domain::{BoundaryKind, BoundedNumeric};
use overstep_stepper::{error::BoundaryError, stepper::BoundedStepper};
use std::io::{self, Write};
use std::ops::Div;

const STAR_LINE_WIDTH: usize = 50;

/// The step count used by `Harness::new`.
pub const DEFAULT_STEPS: u64 = 5;

/// Errors that stop a harness run.
#[derive(Debug)]
pub enum HarnessError {
    /// Writing to the output sink failed.
    Io(io::Error),
    /// The step count is zero, or a derived step count does not fit in `u64`.
    InvalidStepCount(u64),
    /// The step count cannot be represented in the domain, so the step
    /// amount `MAX / steps` cannot be formed.
    UnrepresentableStepCount {
        /// Name of the domain.
        domain: &'static str,
        /// The configured step count.
        steps: u64,
    },
    /// A scenario meant to cross a bound did not cross it within `steps`.
    BoundaryNotReached {
        /// Name of the domain.
        domain: &'static str,
        /// The largest step count tried.
        steps: u64,
    },
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarnessError::Io(e) => write!(f, "failed to write report: {}", e),
            HarnessError::InvalidStepCount(steps) => {
                write!(f, "invalid step count {}", steps)
            }
            HarnessError::UnrepresentableStepCount { domain, steps } => {
                write!(f, "step count {} is not representable in {}", steps, domain)
            }
            HarnessError::BoundaryNotReached { domain, steps } => {
                write!(f, "no bound of {} reached within {} steps", domain, steps)
            }
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HarnessError {
    fn from(e: io::Error) -> Self {
        HarnessError::Io(e)
    }
}

/// The numeric requirements of a harness scenario.
pub trait Scenario: BoundedNumeric + NumCast + Div<Output = Self> {}

impl<T> Scenario for T where T: BoundedNumeric + NumCast + Div<Output = T> {}

/// Runs the report with the default settings.
///
/// # Examples
///
/// ```rust
/// # use overstep_demo::harness::run;
/// let mut out = Vec::new();
/// run(&mut out).unwrap();
/// let report = String::from_utf8(out).unwrap();
/// assert!(report.starts_with("Starting Numeric Overflow / Underflow Tests!\n"));
/// assert!(report.ends_with("All Numeric Overflow / Underflow Tests Complete!\n"));
/// ```
#[inline]
pub fn run<W>(out: &mut W) -> Result<(), HarnessError>
where
    W: Write + ?Sized,
{
    Harness::new().run(out)
}

/// A configurable demonstration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Harness {
    stepper: BoundedStepper,
    steps: u64,
}

impl Default for Harness {
    fn default() -> Self {
        Self {
            stepper: BoundedStepper::default(),
            steps: DEFAULT_STEPS,
        }
    }
}

impl Harness {
    /// Creates a harness with `DEFAULT_STEPS` and the default stepper.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stepper used for every scenario.
    #[inline]
    pub fn stepper(mut self, stepper: BoundedStepper) -> Self {
        self.stepper = stepper;
        self
    }

    /// Sets the in-range step count `n`.
    #[inline]
    pub fn steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    /// Writes the full report for every supported domain to `out`.
    ///
    /// The report is assembled before anything reaches `out`, so a step count
    /// that one of the domains cannot use leaves `out` untouched.
    pub fn run<W>(&self, out: &mut W) -> Result<(), HarnessError>
    where
        W: Write + ?Sized,
    {
        let counts = self.step_counts()?;
        let mut report = Vec::new();
        self.write_report(&mut report, counts)?;
        out.write_all(&report)?;
        Ok(())
    }

    fn write_report(&self, out: &mut Vec<u8>, counts: StepCounts) -> Result<(), HarnessError> {
        let star_line = "*".repeat(STAR_LINE_WIDTH);

        writeln!(out, "Starting Numeric Overflow / Underflow Tests!")?;

        section(out, &star_line, "*** Running Overflow Tests ***")?;
        self.overflow_test::<i8>(out, counts)?;
        self.overflow_test::<i16>(out, counts)?;
        self.overflow_test::<i32>(out, counts)?;
        self.overflow_test::<i64>(out, counts)?;
        self.overflow_test::<i128>(out, counts)?;
        self.overflow_test::<isize>(out, counts)?;
        self.overflow_test::<u8>(out, counts)?;
        self.overflow_test::<u16>(out, counts)?;
        self.overflow_test::<u32>(out, counts)?;
        self.overflow_test::<u64>(out, counts)?;
        self.overflow_test::<u128>(out, counts)?;
        self.overflow_test::<usize>(out, counts)?;
        self.overflow_test::<f32>(out, counts)?;
        self.overflow_test::<f64>(out, counts)?;

        section(out, &star_line, "*** Running Underflow Tests ***")?;
        self.underflow_test::<i8>(out, counts)?;
        self.underflow_test::<i16>(out, counts)?;
        self.underflow_test::<i32>(out, counts)?;
        self.underflow_test::<i64>(out, counts)?;
        self.underflow_test::<i128>(out, counts)?;
        self.underflow_test::<isize>(out, counts)?;
        self.underflow_test::<u8>(out, counts)?;
        self.underflow_test::<u16>(out, counts)?;
        self.underflow_test::<u32>(out, counts)?;
        self.underflow_test::<u64>(out, counts)?;
        self.underflow_test::<u128>(out, counts)?;
        self.underflow_test::<usize>(out, counts)?;
        self.underflow_test::<f32>(out, counts)?;
        self.underflow_test::<f64>(out, counts)?;

        writeln!(out)?;
        writeln!(out, "All Numeric Overflow / Underflow Tests Complete!")?;
        Ok(())
    }

    fn step_counts(&self) -> Result<StepCounts, HarnessError> {
        let invalid = || HarnessError::InvalidStepCount(self.steps);
        if self.steps == 0 {
            return Err(invalid());
        }
        let overflow = self.steps.checked_add(1).ok_or_else(invalid)?;
        let underflow = self
            .steps
            .checked_mul(2)
            .and_then(|s| s.checked_add(1))
            .ok_or_else(invalid)?;
        let search_limit = self
            .steps
            .checked_mul(4)
            .and_then(|s| s.checked_add(4))
            .ok_or_else(invalid)?;
        Ok(StepCounts {
            overflow,
            underflow,
            search_limit,
        })
    }

    fn step_amount<T>(&self) -> Result<T, HarnessError>
    where
        T: Scenario,
    {
        let divisor = <T as NumCast>::from(self.steps).ok_or(
            HarnessError::UnrepresentableStepCount {
                domain: T::NAME,
                steps: self.steps,
            },
        )?;
        Ok(T::maximum() / divisor)
    }

    fn overflow_test<T>(&self, out: &mut Vec<u8>, counts: StepCounts) -> Result<(), HarnessError>
    where
        T: Scenario,
    {
        let start = T::zero();
        let increment = self.step_amount::<T>()?;
        let walk = |steps: u64| self.stepper.add_unmonitored(start, increment, steps);
        let overstep = overstep_count(counts.overflow, counts.search_limit, &walk)?;

        writeln!(out, "Overflow Test of Type = {}", T::NAME)?;
        for (label, steps) in [("Without", self.steps), ("With", overstep)] {
            write!(
                out,
                "\tAdding Numbers {} Overflow ({}, {}, {}) = ",
                label,
                start.render(),
                increment.render(),
                steps
            )?;
            report(out, walk(steps))?;
        }
        Ok(())
    }

    fn underflow_test<T>(&self, out: &mut Vec<u8>, counts: StepCounts) -> Result<(), HarnessError>
    where
        T: Scenario,
    {
        let start = T::maximum();
        let decrement = self.step_amount::<T>()?;
        let walk = |steps: u64| self.stepper.subtract_unmonitored(start, decrement, steps);
        let overstep = overstep_count(counts.underflow, counts.search_limit, &walk)?;

        writeln!(out, "Underflow Test of Type = {}", T::NAME)?;
        for (label, steps) in [("Without", self.steps), ("With", overstep)] {
            write!(
                out,
                "\tSubtracting Numbers {} Underflow ({}, {}, {}) = ",
                label,
                start.render(),
                decrement.render(),
                steps
            )?;
            report(out, walk(steps))?;
        }
        Ok(())
    }
}

/// Overstepping counts shared by every domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StepCounts {
    /// `n + 1`, the nominal overflow count.
    overflow: u64,
    /// `2n + 1`, the nominal underflow count.
    underflow: u64,
    /// `4n + 4`. A walk of `MAX / n` from either bound crosses the other
    /// one within this many steps for every integral domain.
    search_limit: u64,
}

/// Returns `nominal` if a walk of that many steps crosses a bound, otherwise
/// the first step at which a walk of at most `limit` steps does cross.
fn overstep_count<T, F>(nominal: u64, limit: u64, walk: F) -> Result<u64, HarnessError>
where
    T: BoundedNumeric,
    F: Fn(u64) -> Result<T, BoundaryError<T>>,
{
    if walk(nominal).is_err() {
        return Ok(nominal);
    }
    match walk(limit) {
        Err(error) => Ok(error.step()),
        Ok(_) => Err(HarnessError::BoundaryNotReached {
            domain: T::NAME,
            steps: limit,
        }),
    }
}

fn section<W>(out: &mut W, star_line: &str, title: &str) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out)?;
    writeln!(out, "{}", star_line)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", star_line)
}

/// Finishes a scenario line with the value, or with the breach marker and
/// the breach itself.
fn report<T, W>(out: &mut W, result: Result<T, BoundaryError<T>>) -> io::Result<()>
where
    T: BoundedNumeric,
    W: Write + ?Sized,
{
    match result {
        Ok(value) => writeln!(out, "{}", value.render()),
        Err(error) => {
            let marker = match error.kind() {
                BoundaryKind::Overflow => "OVERFLOW!",
                BoundaryKind::Underflow => "UNDERFLOW!",
            };
            writeln!(out, "{} {}", marker, error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overstep_core::num::boundary::FloatBoundary;

    fn report_for(harness: Harness) -> String {
        let mut out = Vec::new();
        harness.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_banner_and_sections() {
        let report = report_for(Harness::new());
        let lines: Vec<&str> = report.lines().collect();
        let star_line = "*".repeat(50);

        assert_eq!(lines[0], "Starting Numeric Overflow / Underflow Tests!");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], star_line);
        assert_eq!(lines[3], "*** Running Overflow Tests ***");
        assert_eq!(lines[4], star_line);
        let underflow_header = format!("\n\n{}\n*** Running Underflow Tests ***\n", star_line);
        assert!(report.contains(&underflow_header));
        assert!(report.ends_with("\n\nAll Numeric Overflow / Underflow Tests Complete!\n"));
        // banner 1, two sections of 4, 14 domains * 3 lines per section, closing 2
        assert_eq!(lines.len(), 1 + 2 * 4 + 2 * 14 * 3 + 2);
    }

    #[test]
    fn test_every_domain_reports_once_per_section_in_order() {
        let report = report_for(Harness::new());
        let names = [
            "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128",
            "usize", "f32", "f64",
        ];
        for prefix in ["Overflow Test of Type = ", "Underflow Test of Type = "] {
            let seen: Vec<&str> = report
                .lines()
                .filter_map(|l| l.strip_prefix(prefix))
                .collect();
            assert_eq!(seen, names);
        }
    }

    #[test]
    fn test_only_overstepping_lines_breach() {
        let report = report_for(Harness::new());
        let count = |needle: &str| report.lines().filter(|l| l.contains(needle)).count();

        assert_eq!(count("OVERFLOW!"), 14);
        assert_eq!(count("UNDERFLOW!"), 14);
        for line in report.lines().filter(|l| l.contains(" Without ")) {
            assert!(!line.contains("FLOW!"), "unexpected breach: {}", line);
        }
        for line in report.lines().filter(|l| l.contains(" With ")) {
            assert!(line.contains("FLOW!"), "missing breach: {}", line);
        }
    }

    #[test]
    fn test_concrete_lines() {
        let report = report_for(Harness::new());
        for expected in [
            "\tAdding Numbers Without Overflow (0, 25, 5) = 125",
            "\tAdding Numbers Without Overflow (0, 429496729, 5) = 2147483645",
            concat!(
                "\tAdding Numbers With Overflow (0, 429496729, 6) = OVERFLOW! ",
                "Overflow in i32 at step 6 of 6: ",
                "2147483645 + 429496729 would exceed maximum 2147483647"
            ),
            "\tAdding Numbers Without Overflow (0, 51, 5) = 255",
            "\tAdding Numbers Without Overflow (0, 6.805647e37, 5) = 3.4028235e38",
            "\tSubtracting Numbers Without Underflow (127, 25, 5) = 2",
            "\tSubtracting Numbers Without Underflow (255, 51, 5) = 0",
            concat!(
                "\tSubtracting Numbers With Underflow (255, 51, 11) = UNDERFLOW! ",
                "Underflow in u8 at step 6 of 11: 0 - 51 would fall below minimum 0"
            ),
        ] {
            assert!(
                report.lines().any(|l| l == expected),
                "missing line: {:?}",
                expected
            );
        }
    }

    #[test]
    fn test_legacy_policy_breaks_float_in_range_scenario() {
        let stepper = BoundedStepper::new().float_boundary(FloatBoundary::Legacy);
        let report = report_for(Harness::new().stepper(stepper));
        let breached: Vec<&str> = report
            .lines()
            .filter(|l| l.contains(" Without ") && l.contains("FLOW!"))
            .collect();
        assert_eq!(breached.len(), 2);
        assert!(breached.iter().all(|l| l.starts_with("\tAdding Numbers")));
    }

    #[test]
    fn test_invalid_step_counts() {
        let mut out = Vec::new();
        assert!(matches!(
            Harness::new().steps(0).run(&mut out),
            Err(HarnessError::InvalidStepCount(0))
        ));
        assert!(matches!(
            Harness::new().steps(u64::MAX).run(&mut out),
            Err(HarnessError::InvalidStepCount(u64::MAX))
        ));
        assert!(out.is_empty());

        let error = Harness::new().steps(200).run(&mut out).unwrap_err();
        assert!(matches!(
            error,
            HarnessError::UnrepresentableStepCount {
                domain: "i8",
                steps: 200
            }
        ));
        assert_eq!(error.to_string(), "step count 200 is not representable in i8");
        assert!(out.is_empty());
    }

    #[test]
    fn test_overstepping_lines_breach_for_any_step_count() {
        for steps in [1, 2, 3, 7, 10, 33, 64, 100, 127] {
            let report = report_for(Harness::new().steps(steps));
            let overstepping: Vec<&str> =
                report.lines().filter(|l| l.contains(" With ")).collect();
            assert_eq!(overstepping.len(), 28, "steps = {}", steps);
            for line in overstepping {
                assert!(line.contains("FLOW!"), "steps = {}: {}", steps, line);
            }
        }
    }

    #[test]
    fn test_truncated_step_amount_extends_to_first_crossing() {
        let report = report_for(Harness::new().steps(100));
        for expected in [
            "\tAdding Numbers Without Overflow (0, 1, 100) = 100",
            "\tSubtracting Numbers Without Underflow (127, 1, 100) = 27",
        ] {
            assert!(report.lines().any(|l| l == expected), "missing line: {:?}", expected);
        }
        for prefix in [
            "\tAdding Numbers With Overflow (0, 1, 128) = OVERFLOW! Overflow in i8 at step 128 ",
            "\tAdding Numbers With Overflow (0, 2, 128) = OVERFLOW! Overflow in u8 at step 128 ",
            "\tAdding Numbers With Overflow (0, 327, 101) = OVERFLOW! ",
            "\tSubtracting Numbers With Underflow (127, 1, 256) = UNDERFLOW! ",
            "\tSubtracting Numbers With Underflow (255, 2, 201) = UNDERFLOW! ",
        ] {
            assert!(
                report.lines().any(|l| l.starts_with(prefix)),
                "missing line starting with: {:?}",
                prefix
            );
        }
    }

    #[test]
    fn test_failing_sink() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let error = run(&mut FailingSink).unwrap_err();
        assert!(matches!(error, HarnessError::Io(_)));
        assert!(std::error::Error::source(&error).is_some());
    }
}
