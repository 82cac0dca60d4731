//! Actuator and presentation sink traits.
//!
//! Everything the core drives (lights, buzzers, a status display) sits
//! behind one of these traits. Implement them for your hardware (GPIO, PWM,
//! PIO pixel matrix, I2C display, ...); the core neither knows nor cares.
//! All methods are infallible: handle hardware errors internally.

use crate::types::{Mode, SignalPhase};
use palette::Srgb;

/// Trait for the visual signal output.
///
/// One call drives every visual surface the signal has (an RGB indicator and
/// a pixel matrix in the reference hardware, both showing the same color).
/// Channels carry binary intensity: 0 or 255, no dimming.
pub trait VisualSink {
    /// Sets the signal to the given color.
    fn set_color(&mut self, color: Srgb<u8>);
}

/// Trait for the audible output.
///
/// The reference hardware has two buzzer channels driven identically, so a
/// single boolean covers both: `true` makes them sound, `false` silences
/// them.
pub trait AudioSink {
    /// Turns the buzzers on or off.
    fn set_audio(&mut self, on: bool);
}

/// Trait for the status presentation.
///
/// Receives the sampled mode and phase on every refresh; read-only, with no
/// feedback into the core.
pub trait StatusSink {
    /// Renders the current status.
    fn render(&mut self, mode: Mode, phase: SignalPhase);
}

impl<T: VisualSink + ?Sized> VisualSink for &mut T {
    fn set_color(&mut self, color: Srgb<u8>) {
        T::set_color(self, color);
    }
}

impl<T: AudioSink + ?Sized> AudioSink for &mut T {
    fn set_audio(&mut self, on: bool) {
        T::set_audio(self, on);
    }
}

impl<T: StatusSink + ?Sized> StatusSink for &mut T {
    fn render(&mut self, mode: Mode, phase: SignalPhase) {
        T::render(self, mode, phase);
    }
}
