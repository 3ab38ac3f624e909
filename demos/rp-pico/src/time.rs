//! Hardware timer wrapper for hue-cycler time traits.
//!
//! Wraps the RP2040's free-running 1 MHz timer (using fugit types) so the
//! software PWM can schedule sub-tick deadlines in microseconds.

use fugit::{MicrosDurationU64, TimerInstantU64};
use hue_cycler::{TimeDuration, TimeInstant, TimeSource};

/// Duration type backed by fugit microsecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(MicrosDurationU64);

impl TimeDuration for Duration {
    const ZERO: Self = Duration(MicrosDurationU64::from_ticks(0));

    fn as_micros(&self) -> u64 {
        self.0.to_micros()
    }

    fn from_micros(micros: u64) -> Self {
        Duration(MicrosDurationU64::micros(micros))
    }
}

/// Instant type backed by fugit timer instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(TimerInstantU64<1_000_000>);

impl TimeInstant for Instant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        let ticks = self.0.ticks().saturating_sub(earlier.0.ticks());
        Duration(MicrosDurationU64::from_ticks(ticks))
    }
}

/// Time source wrapper around RP2040 Timer
pub struct HardwareTimer {
    timer: rp_pico::hal::Timer,
}

impl HardwareTimer {
    pub fn new(timer: rp_pico::hal::Timer) -> Self {
        Self { timer }
    }
}

impl TimeSource<Instant> for HardwareTimer {
    fn now(&self) -> Instant {
        Instant(self.timer.get_counter())
    }
}
