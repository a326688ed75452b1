//! Mutable animation state and the per-tick advance transition

use crate::io::configuration::{Config, DASH_CYCLE_LEN};
use crate::pattern::mode::Pattern;

/// Result of advancing past one tick
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Keep ticking
    Continue,
    /// A non-looping run finished its pass and should stop
    Complete,
}

/// Blink phase, walking position and dash sub-step of a run
///
/// Created fresh at every start, so a run always begins ON at step 0
/// with the first dash mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationState {
    phase_on: bool,
    step_index: usize,
    dash_sub_step: usize,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Initial state: ON phase, first cell, first dash
    pub const fn new() -> Self {
        Self {
            phase_on: true,
            step_index: 0,
            dash_sub_step: 0,
        }
    }

    /// Whether the next frame shows the pattern
    pub const fn phase_on(&self) -> bool {
        self.phase_on
    }

    /// Walking position, always below `total_cells`
    pub const fn step_index(&self) -> usize {
        self.step_index
    }

    /// Dash rotation position, always below 4
    pub const fn dash_sub_step(&self) -> usize {
        self.dash_sub_step
    }

    /// Move to the state for the next tick
    ///
    /// Every tick flips the blink phase. Progress only happens on the
    /// OFF→ON edge: the dash rotation turns, the walking cell moves, and a
    /// non-looping run reports [`Advance::Complete`] once its pass is over.
    /// Random groupings without whole-line blinking never change state.
    pub fn advance(&mut self, config: &Config) -> Advance {
        let pattern = config.mode().pattern();

        if pattern == Pattern::Random && !config.whole_line() {
            return Advance::Continue;
        }

        self.phase_on = !self.phase_on;
        if !self.phase_on {
            return Advance::Continue;
        }

        let pass_done = if config.whole_line() {
            // No walk; a lone blink or a full dash rotation is the pass
            pattern != Pattern::DashCycle || self.rotate_dash()
        } else {
            let moves = pattern != Pattern::DashCycle || self.rotate_dash();
            moves && self.step_forward(config.total_cells(), config.looping())
        };

        if pass_done && !config.looping() {
            Advance::Complete
        } else {
            Advance::Continue
        }
    }

    // Returns true when the rotation wrapped back to its first mask
    const fn rotate_dash(&mut self) -> bool {
        self.dash_sub_step = (self.dash_sub_step + 1) % DASH_CYCLE_LEN;
        self.dash_sub_step == 0
    }

    // Returns true when the walk ran off the end of the grid
    const fn step_forward(&mut self, total_cells: usize, looping: bool) -> bool {
        let next = self.step_index + 1;
        if next < total_cells {
            self.step_index = next;
            false
        } else {
            if looping {
                self.step_index = 0;
            }
            true
        }
    }
}
