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

use overstep_core::num::domain::BoundaryKind;

/// The arithmetic a stepping run repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `start + delta * steps`.
    Add,
    /// `start - delta * steps`.
    Subtract,
}

impl Operation {
    /// The infix operator used in diagnostics.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "Add"),
            Operation::Subtract => write!(f, "Subtract"),
        }
    }
}

/// Lifecycle of a single stepping run.
///
/// A run starts `Running` and ends in exactly one of the three terminal
/// states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StepState {
    #[default]
    Running,
    /// Every requested step was committed.
    Succeeded,
    /// A step would have exceeded the domain maximum.
    FailedOverflow,
    /// A step would have gone below the domain minimum.
    FailedUnderflow,
}

impl StepState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, StepState::Running)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, StepState::FailedOverflow | StepState::FailedUnderflow)
    }
}

impl From<BoundaryKind> for StepState {
    fn from(kind: BoundaryKind) -> Self {
        match kind {
            BoundaryKind::Overflow => StepState::FailedOverflow,
            BoundaryKind::Underflow => StepState::FailedUnderflow,
        }
    }
}

impl std::fmt::Display for StepState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepState::Running => write!(f, "Running"),
            StepState::Succeeded => write!(f, "Succeeded"),
            StepState::FailedOverflow => write!(f, "Failed (overflow)"),
            StepState::FailedUnderflow => write!(f, "Failed (underflow)"),
        }
    }
}
