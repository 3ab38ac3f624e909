//! Shared test infrastructure for hue-cycler integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use hue_cycler::{IrCarrier, RgbColor, RgbLed, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_micros(&self) -> u64 {
        self.0
    }

    fn from_micros(micros: u64) -> Self {
        TestDuration(micros)
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
///
/// Every `now()` call also moves the clock forward by `tick_per_read`, so
/// code that spins on the clock terminates.
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
    tick_per_read: u64,
    reads: Cell<u64>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::ticking(0)
    }

    pub fn ticking(tick_per_read: u64) -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
            tick_per_read,
            reads: Cell::new(0),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn elapsed(&self) -> u64 {
        self.current_time.get().0
    }

    pub fn reads(&self) -> u64 {
        self.reads.get()
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        let now = self.current_time.get();
        self.current_time.set(TestInstant(now.0 + self.tick_per_read));
        self.reads.set(self.reads.get() + 1);
        now
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records rendered frames
pub struct MockLed {
    frames: u32,
    last_color: Option<RgbColor>,
    distinct_colors: heapless::Vec<RgbColor, 32>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            frames: 0,
            last_color: None,
            distinct_colors: heapless::Vec::new(),
        }
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn last_color(&self) -> Option<RgbColor> {
        self.last_color
    }

    /// First colours shown, consecutive repeats collapsed
    pub fn color_history(&self) -> &[RgbColor] {
        &self.distinct_colors
    }
}

impl RgbLed for MockLed {
    fn render_frame(&mut self, color: RgbColor) {
        self.frames += 1;
        if self.last_color != Some(color) {
            let _ = self.distinct_colors.push(color);
        }
        self.last_color = Some(color);
    }
}

// ============================================================================
// Mock GPIO
// ============================================================================

/// Output pin that records every level written to it
pub struct MockPin {
    history: heapless::Vec<bool, 512>,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    /// Levels written, `true` for high
    pub fn history(&self) -> &[bool] {
        &self.history
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let _ = self.history.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let _ = self.history.push(true);
        Ok(())
    }
}

// ============================================================================
// Mock IR carrier
// ============================================================================

/// Carrier that records when it was switched, in clock microseconds
pub struct MockCarrier<'t> {
    clock: &'t MockTimeSource,
    pub enabled: bool,
    pub enabled_at: Option<u64>,
    pub disabled_at: Option<u64>,
    pub switches: u32,
}

impl<'t> MockCarrier<'t> {
    pub fn new(clock: &'t MockTimeSource) -> Self {
        Self {
            clock,
            enabled: false,
            enabled_at: None,
            disabled_at: None,
            switches: 0,
        }
    }
}

impl IrCarrier for MockCarrier<'_> {
    fn enable(&mut self) {
        self.enabled = true;
        self.enabled_at = Some(self.clock.elapsed());
        self.switches += 1;
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.disabled_at = Some(self.clock.elapsed());
        self.switches += 1;
    }
}
