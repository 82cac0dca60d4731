//! Periodic status reporting.

use crate::sink::StatusSink;
use crate::state::ControllerState;
use crate::types::{Mode, SignalPhase};
use core::fmt::Write;
use heapless::String;

/// Interval between status refreshes, in milliseconds.
pub const STATUS_REFRESH_MILLIS: u64 = 500;

/// Periodically samples mode and phase and hands them to a [`StatusSink`].
///
/// Read-only: the reporter never writes shared state. Each
/// [`step`](Self::step) renders once and returns the refresh interval for
/// the caller to sleep.
pub struct StatusReporter<'s, S: StatusSink> {
    state: &'s ControllerState,
    sink: S,
}

impl<'s, S: StatusSink> StatusReporter<'s, S> {
    pub fn new(state: &'s ControllerState, sink: S) -> Self {
        Self { state, sink }
    }

    /// Renders the current status and returns [`STATUS_REFRESH_MILLIS`].
    pub fn step(&mut self) -> u64 {
        self.sink.render(self.state.mode(), self.state.phase());
        STATUS_REFRESH_MILLIS
    }
}

/// Renders the canonical two-line status text.
///
/// Line one carries the mode, line two the signal phase. Buffers are sized
/// for the longest rendering, so the writes cannot truncate.
pub fn status_lines(mode: Mode, phase: SignalPhase) -> (String<16>, String<16>) {
    let mut mode_line = String::new();
    let mut phase_line = String::new();
    let _ = write!(mode_line, "Mode: {mode}");
    let _ = write!(phase_line, "Signal: {phase}");
    (mode_line, phase_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_render_mode_and_phase() {
        let (mode_line, phase_line) = status_lines(Mode::Night, SignalPhase::Caution);
        assert_eq!(mode_line.as_str(), "Mode: Night");
        assert_eq!(phase_line.as_str(), "Signal: Caution");
    }

    #[test]
    fn longest_rendering_fits_the_buffers() {
        let (mode_line, phase_line) = status_lines(Mode::Normal, SignalPhase::Caution);
        assert_eq!(mode_line.as_str(), "Mode: Normal");
        assert_eq!(phase_line.as_str(), "Signal: Caution");
    }
}
