//! Shared controller state: the single source of truth for mode and phase.

use crate::types::{Mode, SignalPhase};
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// The process-wide state shared by every unit of the controller.
///
/// Holds the night-mode flag and the currently published signal phase. Each
/// field is single-writer, multi-reader: the debounced button toggle is the
/// only writer of the mode flag, the semaphore machine the only writer of the
/// phase. Both are plain atomics accessed with load/store only, so readers
/// always observe a full-width value, no reader ever blocks a writer, and the
/// writers stay usable from interrupt context on targets without atomic
/// read-modify-write support.
///
/// `new` is `const`, so the state can live in a `static` shared between tasks
/// and an interrupt handler:
///
/// ```
/// use traffic_sequencer::{ControllerState, Mode, SignalPhase};
///
/// static STATE: ControllerState = ControllerState::new();
///
/// assert_eq!(STATE.mode(), Mode::Normal);
/// assert_eq!(STATE.phase(), SignalPhase::Go);
/// ```
#[derive(Debug)]
pub struct ControllerState {
    night_mode: AtomicBool,
    phase: AtomicU8,
}

impl ControllerState {
    /// Creates the startup state: `Mode::Normal`, `SignalPhase::Go`.
    pub const fn new() -> Self {
        Self {
            night_mode: AtomicBool::new(false),
            phase: AtomicU8::new(SignalPhase::Go as u8),
        }
    }

    /// Returns the current operating mode.
    pub fn mode(&self) -> Mode {
        if self.night_mode.load(Ordering::Relaxed) {
            Mode::Night
        } else {
            Mode::Normal
        }
    }

    /// Publishes a new operating mode.
    ///
    /// Reserved for the single mode writer, the debounced button toggle.
    pub fn set_mode(&self, mode: Mode) {
        self.night_mode
            .store(matches!(mode, Mode::Night), Ordering::Relaxed);
    }

    /// Returns the currently published signal phase.
    pub fn phase(&self) -> SignalPhase {
        // Only `set_phase` writes this byte, so the decode cannot fail; fall
        // back to the startup phase rather than propagate an impossible error.
        SignalPhase::from_raw(self.phase.load(Ordering::Relaxed)).unwrap_or(SignalPhase::Go)
    }

    /// Publishes a new signal phase.
    ///
    /// Reserved for the single phase writer, the semaphore machine.
    pub fn set_phase(&self, phase: SignalPhase) {
        self.phase.store(phase as u8, Ordering::Relaxed);
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}
