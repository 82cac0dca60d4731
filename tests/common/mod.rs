//! Shared test infrastructure for traffic-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use traffic_sequencer::{
    AudioSink, Mode, SignalPhase, StatusSink, TimeDuration, TimeInstant, TimeSource, VisualSink,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Sinks
// ============================================================================

/// Mock visual sink that records every color it is driven to
pub struct MockVisual {
    colors: heapless::Vec<Srgb<u8>, 32>,
}

impl MockVisual {
    pub fn new() -> Self {
        Self {
            colors: heapless::Vec::new(),
        }
    }

    pub fn colors(&self) -> &[Srgb<u8>] {
        &self.colors
    }

    pub fn last_color(&self) -> Option<Srgb<u8>> {
        self.colors.last().copied()
    }
}

impl VisualSink for MockVisual {
    fn set_color(&mut self, color: Srgb<u8>) {
        let _ = self.colors.push(color);
    }
}

/// Mock audio sink that records every on/off transition
pub struct MockAudio {
    events: heapless::Vec<bool, 64>,
}

impl MockAudio {
    pub fn new() -> Self {
        Self {
            events: heapless::Vec::new(),
        }
    }

    pub fn events(&self) -> &[bool] {
        &self.events
    }
}

impl AudioSink for MockAudio {
    fn set_audio(&mut self, on: bool) {
        let _ = self.events.push(on);
    }
}

/// Mock status sink that records every rendered sample
pub struct MockStatus {
    samples: heapless::Vec<(Mode, SignalPhase), 16>,
}

impl MockStatus {
    pub fn new() -> Self {
        Self {
            samples: heapless::Vec::new(),
        }
    }

    pub fn samples(&self) -> &[(Mode, SignalPhase)] {
        &self.samples
    }
}

impl StatusSink for MockStatus {
    fn render(&mut self, mode: Mode, phase: SignalPhase) {
        let _ = self.samples.push((mode, phase));
    }
}
