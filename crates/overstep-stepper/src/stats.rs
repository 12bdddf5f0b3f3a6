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

use crate::state::StepState;
use overstep_core::num::ops::saturating_arithmetic::{SaturatingAddVal, SaturatingSubVal};

/// Statistics collected during a single stepping run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStatistics {
    /// Steps the caller asked for.
    pub steps_requested: u64,
    /// Steps that passed the boundary check and were applied.
    pub steps_committed: u64,
    /// Where the run currently is in its lifecycle.
    pub final_state: StepState,
}

impl StepStatistics {
    #[inline]
    pub fn new(steps_requested: u64) -> Self {
        Self {
            steps_requested,
            steps_committed: 0,
            final_state: StepState::Running,
        }
    }

    #[inline]
    pub fn on_step_committed(&mut self) {
        self.steps_committed = self.steps_committed.saturating_add_val(1);
    }

    #[inline]
    pub fn on_finish(&mut self, state: StepState) {
        debug_assert!(state.is_terminal());
        self.final_state = state;
    }

    /// Steps that were requested but not applied.
    #[inline]
    pub fn steps_remaining(&self) -> u64 {
        self.steps_requested.saturating_sub_val(self.steps_committed)
    }
}

impl std::fmt::Display for StepStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Stepping Statistics:")?;
        writeln!(f, "  Steps requested: {}", self.steps_requested)?;
        writeln!(f, "  Steps committed: {}", self.steps_committed)?;
        write!(f, "  Final state:     {}", self.final_state)
    }
}
