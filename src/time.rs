//! Time abstraction traits for platform-agnostic timing.
//!
//! The core schedules itself in plain milliseconds (every dwell and cadence
//! table is defined in ms), so these traits only cover what the crate needs:
//! reading a monotonic instant and measuring the gap between two instants.
//! Implement them once per platform; see `demos/rp-pico` for an
//! `embassy_time` implementation.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
