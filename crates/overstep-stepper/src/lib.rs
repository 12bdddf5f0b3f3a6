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

//! Overstep stepper: repeated addition and subtraction that never leaves
//! the numeric domain.
//!
//! A stepping run applies a fixed delta to a start value `steps` times. Before
//! each step is committed it is checked against the bounds of the domain; the
//! first step that would cross a bound ends the run with a `BoundaryError`
//! instead of a wrapped, saturated or infinite value.
//!
//! Core flow
//! - Call `stepper::bounded_add` / `stepper::bounded_subtract` for the default
//!   behaviour.
//! - Or configure a `stepper::BoundedStepper` (float boundary policy) and
//!   attach a `monitor::step_monitor::StepMonitor` to observe each step.
//!
//! Module map
//! - `stepper`: the stepping loop, its builder-style configuration and the
//!   free functions.
//! - `error`: `BoundaryError`, the failure value carrying the crossing step.
//! - `state`: `Operation` and the `StepState` lifecycle.
//! - `stats`: step counters.
//! - `monitor`: step monitors (log, recording, composite, no-op).

pub mod error;
pub mod monitor;
pub mod state;
pub mod stats;
pub mod stepper;
