//! The semaphore state machine driving the visual signal.

use crate::sink::VisualSink;
use crate::state::ControllerState;
use crate::types::{Mode, SignalColor, SignalPhase};
use palette::Srgb;

/// Dwell of each night-mode flash sub-state, in milliseconds.
pub const NIGHT_FLASH_MILLIS: u64 = 1000;

/// Position within the active transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Normal-mode cycling, holding the given phase.
    Cycle(SignalPhase),
    /// Night-mode flash, yellow lit.
    FlashOn,
    /// Night-mode flash, dark.
    FlashOff,
}

/// The semaphore state machine.
///
/// Owns the visual sink and is the sole writer of the published phase in
/// [`ControllerState`]. Each [`step`](Self::step) samples the mode, enters
/// the next state of the active transition table, publishes the phase,
/// drives the sink, and returns the state's dwell in milliseconds. The
/// caller sleeps for that long and calls `step` again, forever:
///
/// ```
/// use traffic_sequencer::{ControllerState, SemaphoreMachine, VisualSink, Srgb};
///
/// struct NullSink;
/// impl VisualSink for NullSink {
///     fn set_color(&mut self, _color: Srgb<u8>) {}
/// }
///
/// static STATE: ControllerState = ControllerState::new();
///
/// let mut machine = SemaphoreMachine::new(&STATE, NullSink);
/// let dwell_ms = machine.step(); // entered Go, green lit
/// assert_eq!(dwell_ms, 3000);
/// ```
///
/// Sampling the mode at every state entry bounds how stale a mode change can
/// get by the current dwell. Switching tables always restarts at the head of
/// the new table (Go, or flash-on) rather than resuming the old position.
pub struct SemaphoreMachine<'s, V: VisualSink> {
    state: &'s ControllerState,
    visual: V,
    slot: Option<Slot>,
    current_color: Srgb<u8>,
}

impl<'s, V: VisualSink> SemaphoreMachine<'s, V> {
    /// Creates a machine with the signal dark.
    ///
    /// Nothing is published until the first `step` enters the first state.
    pub fn new(state: &'s ControllerState, mut visual: V) -> Self {
        let off = SignalColor::Off.to_srgb();
        visual.set_color(off);

        Self {
            state,
            visual,
            slot: None,
            current_color: off,
        }
    }

    /// Enters the next state and returns its dwell in milliseconds.
    pub fn step(&mut self) -> u64 {
        let next = match (self.state.mode(), self.slot) {
            (Mode::Normal, Some(Slot::Cycle(phase))) => Slot::Cycle(phase.next()),
            (Mode::Normal, _) => Slot::Cycle(SignalPhase::Go),
            (Mode::Night, Some(Slot::FlashOn)) => Slot::FlashOff,
            (Mode::Night, Some(Slot::FlashOff)) => Slot::FlashOn,
            (Mode::Night, _) => Slot::FlashOn,
        };
        self.slot = Some(next);

        match next {
            Slot::Cycle(phase) => {
                self.state.set_phase(phase);
                self.show(phase.color());
                phase.dwell_millis()
            }
            Slot::FlashOn => {
                // The observable phase while flashing is Caution.
                self.state.set_phase(SignalPhase::Caution);
                self.show(SignalColor::Yellow);
                NIGHT_FLASH_MILLIS
            }
            Slot::FlashOff => {
                self.show(SignalColor::Off);
                NIGHT_FLASH_MILLIS
            }
        }
    }

    /// Returns the color currently driven into the sink.
    pub fn current_color(&self) -> Srgb<u8> {
        self.current_color
    }

    fn show(&mut self, color: SignalColor) {
        let rgb = color.to_srgb();
        self.visual.set_color(rgb);
        self.current_color = rgb;
    }
}
