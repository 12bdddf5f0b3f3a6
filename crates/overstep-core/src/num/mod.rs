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

//! # Numeric Foundations
//!
//! Traits and policies for range-checked numeric programming over the
//! primitive integer and floating-point types.
//!
//! ## Submodules
//!
//! - `domain`: The `BoundedNumeric` trait, implemented for `i8`..`i128`,
//!   `isize`, `u8`..`u128`, `usize`, `f32` and `f64`. It exposes the domain
//!   bounds and performs one checked step up or down.
//! - `boundary`: `FloatBoundary`, the policy applied to floating-point steps
//!   that land near `MAX` or `MIN`.
//! - `ops`: Checked and saturating by-value arithmetic traits used by the
//!   integral step checks and by statistics counters.
//!
//! ## Motivation
//!
//! Integral and floating-point domains overflow differently: integers wrap,
//! floats round to infinity. These modules hide that difference behind a
//! single trait so callers only ever see an in-range value or a
//! `BoundaryKind`.

pub mod boundary;
pub mod domain;
pub mod ops;
