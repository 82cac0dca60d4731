//! Debounced night-mode toggle.

use crate::state::ControllerState;
use crate::time::{TimeDuration, TimeInstant};

/// Minimum gap between two accepted mode toggles, in milliseconds.
pub const MIN_TOGGLE_GAP_MILLIS: u64 = 400;

/// Debounced button-edge handler that flips the night-mode flag.
///
/// Owns the timestamp of the last accepted toggle; nothing outside this
/// struct can observe it. The handler performs a single atomic load and a
/// single atomic store on the shared state; it never blocks, allocates or
/// takes a lock, so it is safe to call from interrupt context or a
/// highest-priority task.
#[derive(Debug)]
pub struct ModeToggle<I: TimeInstant> {
    last_accepted: Option<I>,
}

impl<I: TimeInstant> ModeToggle<I> {
    /// Creates a toggle that will accept the first edge it sees.
    pub const fn new() -> Self {
        Self {
            last_accepted: None,
        }
    }

    /// Handles one button edge at time `now`.
    ///
    /// Flips the mode and records `now` if at least
    /// [`MIN_TOGGLE_GAP_MILLIS`] have passed since the last accepted toggle;
    /// otherwise the edge is treated as bounce and nothing happens. Returns
    /// whether the toggle was applied. Rejection is an intentional no-op,
    /// not an error.
    pub fn toggle_if_debounced(&mut self, now: I, state: &ControllerState) -> bool {
        if let Some(last) = self.last_accepted {
            if now.duration_since(last).as_millis() < MIN_TOGGLE_GAP_MILLIS {
                return false;
            }
        }

        self.last_accepted = Some(now);
        state.set_mode(state.mode().toggled());
        true
    }
}

impl<I: TimeInstant> Default for ModeToggle<I> {
    fn default() -> Self {
        Self::new()
    }
}
