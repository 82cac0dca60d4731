//! Core types: operating mode, signal phase and signal color.

use crate::{COLOR_GREEN, COLOR_OFF, COLOR_RED, COLOR_YELLOW};
use palette::Srgb;

/// Operating mode of the controller.
///
/// `Normal` cycles the semaphore through its three phases; `Night` flashes
/// yellow. The mode is flipped by the debounced button toggle and read by
/// every other unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Cyclic green / yellow / red operation.
    Normal,
    /// Flashing yellow.
    Night,
}

impl Mode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Normal => Mode::Night,
            Mode::Night => Mode::Normal,
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Mode::Normal => write!(f, "Normal"),
            Mode::Night => write!(f, "Night"),
        }
    }
}

/// The published phase of the semaphore.
///
/// Owned by [`SemaphoreMachine`](crate::SemaphoreMachine), which is the sole
/// writer; the cadence player and status reporter only read it. Stored as a
/// single byte so it fits an `AtomicU8`; see [`from_raw`](Self::from_raw).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SignalPhase {
    /// Traffic may proceed.
    Go = 0,
    /// Prepare to stop. Also the published phase while night mode flashes.
    Caution = 1,
    /// Traffic must stop.
    Stop = 2,
}

impl SignalPhase {
    /// The phase that follows in normal-mode cycling.
    pub fn next(self) -> Self {
        match self {
            SignalPhase::Go => SignalPhase::Caution,
            SignalPhase::Caution => SignalPhase::Stop,
            SignalPhase::Stop => SignalPhase::Go,
        }
    }

    /// How long the phase holds before transitioning, in milliseconds.
    pub fn dwell_millis(self) -> u64 {
        match self {
            SignalPhase::Go | SignalPhase::Caution | SignalPhase::Stop => 3000,
        }
    }

    /// The color shown while this phase is active.
    pub fn color(self) -> SignalColor {
        match self {
            SignalPhase::Go => SignalColor::Green,
            SignalPhase::Caution => SignalColor::Yellow,
            SignalPhase::Stop => SignalColor::Red,
        }
    }

    /// Decodes a phase from its byte representation.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(SignalPhase::Go),
            1 => Some(SignalPhase::Caution),
            2 => Some(SignalPhase::Stop),
            _ => None,
        }
    }
}

impl core::fmt::Display for SignalPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SignalPhase::Go => write!(f, "Go"),
            SignalPhase::Caution => write!(f, "Caution"),
            SignalPhase::Stop => write!(f, "Stop"),
        }
    }
}

/// The binary-intensity colors a signal head can show.
///
/// Each maps to an `Srgb<u8>` triple with channels at 0 or 255; there is no
/// dimming in this design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalColor {
    /// All channels off.
    Off,
    Green,
    Yellow,
    Red,
}

impl SignalColor {
    /// The RGB value driven into a [`VisualSink`](crate::VisualSink).
    pub fn to_srgb(self) -> Srgb<u8> {
        match self {
            SignalColor::Off => COLOR_OFF,
            SignalColor::Green => COLOR_GREEN,
            SignalColor::Yellow => COLOR_YELLOW,
            SignalColor::Red => COLOR_RED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_cycle_closes_after_three_steps() {
        let mut phase = SignalPhase::Go;
        for _ in 0..3 {
            phase = phase.next();
        }
        assert_eq!(phase, SignalPhase::Go);
    }

    #[test]
    fn phase_colors_match_transition_table() {
        assert_eq!(SignalPhase::Go.color(), SignalColor::Green);
        assert_eq!(SignalPhase::Caution.color(), SignalColor::Yellow);
        assert_eq!(SignalPhase::Stop.color(), SignalColor::Red);
    }

    #[test]
    fn raw_round_trip() {
        for phase in [SignalPhase::Go, SignalPhase::Caution, SignalPhase::Stop] {
            assert_eq!(SignalPhase::from_raw(phase as u8), Some(phase));
        }
        assert_eq!(SignalPhase::from_raw(3), None);
    }

    #[test]
    fn colors_are_binary_intensity() {
        for color in [
            SignalColor::Off,
            SignalColor::Green,
            SignalColor::Yellow,
            SignalColor::Red,
        ] {
            let rgb = color.to_srgb();
            for channel in [rgb.red, rgb.green, rgb.blue] {
                assert!(channel == 0 || channel == 255);
            }
        }
    }
}
