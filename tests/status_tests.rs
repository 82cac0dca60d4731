//! Integration tests for the status reporter

mod common;
use common::*;

use traffic_sequencer::{
    ControllerState, Mode, STATUS_REFRESH_MILLIS, SignalPhase, StatusReporter, status_lines,
};

#[test]
fn reporter_samples_the_shared_state_every_refresh() {
    let state = ControllerState::new();
    let mut sink = MockStatus::new();
    let mut reporter = StatusReporter::new(&state, &mut sink);

    assert_eq!(reporter.step(), STATUS_REFRESH_MILLIS);

    state.set_mode(Mode::Night);
    state.set_phase(SignalPhase::Caution);
    assert_eq!(reporter.step(), STATUS_REFRESH_MILLIS);
    drop(reporter);

    assert_eq!(
        sink.samples(),
        &[
            (Mode::Normal, SignalPhase::Go),
            (Mode::Night, SignalPhase::Caution),
        ]
    );
}

#[test]
fn status_lines_cover_every_mode_and_phase() {
    let expectations = [
        (Mode::Normal, SignalPhase::Go, "Mode: Normal", "Signal: Go"),
        (
            Mode::Normal,
            SignalPhase::Caution,
            "Mode: Normal",
            "Signal: Caution",
        ),
        (
            Mode::Normal,
            SignalPhase::Stop,
            "Mode: Normal",
            "Signal: Stop",
        ),
        (
            Mode::Night,
            SignalPhase::Caution,
            "Mode: Night",
            "Signal: Caution",
        ),
    ];

    for (mode, phase, mode_line, phase_line) in expectations {
        let (first, second) = status_lines(mode, phase);
        assert_eq!(first.as_str(), mode_line);
        assert_eq!(second.as_str(), phase_line);
    }
}
