//! Time abstraction traits for platform-agnostic timing.
//!
//! Frame timing is expressed as deadlines against a monotonic clock rather
//! than as calibrated empty loops, so the same PWM cadence holds on any core
//! speed and optimization level.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to microseconds.
    fn as_micros(&self) -> u64;

    /// Creates duration from microseconds.
    fn from_micros(micros: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Spins until `offset_micros` have elapsed since `start`.
///
/// Deadlines are measured from a fixed start instant, so calling this with
/// increasing offsets does not accumulate drift.
pub fn wait_until<I, T>(source: &T, start: I, offset_micros: u64)
where
    I: TimeInstant,
    T: TimeSource<I>,
{
    while source.now().duration_since(start).as_micros() < offset_micros {
        core::hint::spin_loop();
    }
}
