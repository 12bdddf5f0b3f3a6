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

//! # Overstep Core
//!
//! Numeric foundations for overflow/underflow-safe stepping. This crate
//! describes *where* a fixed-width numeric domain ends and *how* a single
//! step towards either end is checked, so that higher-level stepping code
//! can stay generic over every primitive integer and floating-point type.
//!
//! ## Modules
//!
//! - `num`: The `BoundedNumeric` capability trait (domain bounds, category
//!   and single-step checks), the `FloatBoundary` policy that decides how
//!   floating-point domains treat the region near their bounds, and by-value
//!   checked/saturating arithmetic traits for the integer primitives.
//!
//! ## Purpose
//!
//! A step either commits an in-range value or reports which bound it would
//! have crossed. Nothing in this crate wraps, saturates silently, or panics
//! on overflow.

pub mod num;
