//! Audible cadence tables and the player that walks them.

use crate::sink::AudioSink;
use crate::state::ControllerState;
use crate::types::{Mode, SignalPhase};

/// One beep-then-pause element of a cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceStep {
    /// How long the buzzers sound, in milliseconds.
    pub beep_millis: u64,
    /// How long they stay silent afterwards, in milliseconds.
    pub pause_millis: u64,
}

const fn step(beep_millis: u64, pause_millis: u64) -> CadenceStep {
    CadenceStep {
        beep_millis,
        pause_millis,
    }
}

/// A complete beep/pause pattern for one signal phase or for night mode.
///
/// The tables are hand-tuned, not derived from the dwell times; each normal
/// table sums to exactly 3000 ms and the night table to exactly 2000 ms.
/// Trailing zero-length pauses are explicit so the sums hold and the buzzers
/// are silenced after every beep, the final one included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    steps: &'static [CadenceStep],
}

impl Cadence {
    /// While green: two long beeps, then a shortened one.
    pub const GO: Cadence = Cadence {
        steps: &[step(1000, 200), step(1000, 200), step(600, 0)],
    };

    /// While yellow: rapid intermittent beeping.
    pub const CAUTION: Cadence = Cadence {
        steps: &[
            step(350, 50),
            step(350, 50),
            step(350, 50),
            step(350, 50),
            step(350, 50),
            step(350, 50),
            step(350, 50),
            step(200, 0),
        ],
    };

    /// While red: two spaced beeps.
    pub const STOP: Cadence = Cadence {
        steps: &[step(500, 1500), step(500, 500)],
    };

    /// Night mode: one short beep every two seconds.
    pub const NIGHT: Cadence = Cadence { steps: &[step(100, 1900)] };

    /// Selects the cadence for the given mode and phase.
    ///
    /// Night mode has a single cadence regardless of the published phase.
    pub fn for_status(mode: Mode, phase: SignalPhase) -> &'static Cadence {
        match (mode, phase) {
            (Mode::Night, _) => &Cadence::NIGHT,
            (Mode::Normal, SignalPhase::Go) => &Cadence::GO,
            (Mode::Normal, SignalPhase::Caution) => &Cadence::CAUTION,
            (Mode::Normal, SignalPhase::Stop) => &Cadence::STOP,
        }
    }

    /// The steps of this cadence.
    pub fn steps(&self) -> &'static [CadenceStep] {
        self.steps
    }

    /// Total duration of one run through the cadence, in milliseconds.
    pub fn total_millis(&self) -> u64 {
        self.steps
            .iter()
            .map(|s| s.beep_millis + s.pause_millis)
            .sum()
    }
}

/// Walks cadence tables and drives the audio sink.
///
/// Each [`step`](Self::step) emits one half-slot (a beep half asserts the
/// buzzers and returns the beep duration, a pause half silences them and
/// returns the pause duration) and the caller sleeps for the returned
/// milliseconds before stepping again. Mode and phase are re-sampled from
/// [`ControllerState`] only when a new run through a table begins, so a
/// phase transition mid-sequence shows up in the audio one sequence later at
/// worst. That skew is inherent to the independent-loop design and bounded
/// by one table length.
pub struct CadencePlayer<'s, A: AudioSink> {
    state: &'s ControllerState,
    audio: A,
    cadence: &'static Cadence,
    /// Half-slot index into `cadence`: even = beep, odd = pause.
    slot: usize,
}

impl<'s, A: AudioSink> CadencePlayer<'s, A> {
    /// Creates a player with the buzzers silenced.
    pub fn new(state: &'s ControllerState, mut audio: A) -> Self {
        audio.set_audio(false);

        Self {
            state,
            audio,
            cadence: Cadence::for_status(state.mode(), state.phase()),
            slot: 0,
        }
    }

    /// Emits the next half-slot and returns how long to hold it, in
    /// milliseconds.
    pub fn step(&mut self) -> u64 {
        if self.slot == 0 {
            self.cadence = Cadence::for_status(self.state.mode(), self.state.phase());
        }

        let step = self.cadence.steps()[self.slot / 2];
        let (on, hold) = if self.slot % 2 == 0 {
            (true, step.beep_millis)
        } else {
            (false, step.pause_millis)
        };
        self.audio.set_audio(on);

        self.slot += 1;
        if self.slot >= self.cadence.steps().len() * 2 {
            self.slot = 0;
        }

        hold
    }
}
