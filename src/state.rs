//! Animation state shared between the main loop and the reset handler.
//!
//! [`SharedAnimation`] is the single owner of the live [`AnimationState`].
//! Every access goes through a critical section, so an interrupt-driven reset
//! is never observed half-applied regardless of the target's word size.

use core::cell::Cell;

use critical_section::Mutex;

use crate::config::AnimationConfig;
use crate::hue::HUE_MAX;
use crate::trigger::ResetTrigger;

/// Position of the animation: current hue and intensity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationState {
    /// Current hue, always in `0..HUE_MAX`.
    pub hue: u16,
    /// Current intensity level, within the configured level range.
    pub level: u16,
}

impl AnimationState {
    /// Creates a state at `hue` and `level`, unchecked.
    pub const fn new(hue: u16, level: u16) -> Self {
        Self { hue, level }
    }

    /// The state at power-on and after every reset: hue 0 at the minimum level.
    pub const fn initial(config: &AnimationConfig) -> Self {
        Self::new(0, config.level_min())
    }

    /// Returns the state one hue step further along.
    ///
    /// Stepping past the end of the wheel starts a new sweep at hue 0 and
    /// raises the level by one increment, saturating at the maximum. The flag
    /// is `true` when a sweep was completed.
    pub fn advanced(self, config: &AnimationConfig) -> (Self, bool) {
        let hue = self.hue.saturating_add(config.hue_step());
        if hue < HUE_MAX {
            return (Self::new(hue, self.level), false);
        }

        let level = self
            .level
            .saturating_add(config.level_step())
            .min(config.level_max());
        (Self::new(0, level), true)
    }

    /// Forces hue and level back into their valid ranges.
    pub fn clamped(self, config: &AnimationConfig) -> Self {
        Self::new(
            self.hue % HUE_MAX,
            self.level.clamp(config.level_min(), config.level_max()),
        )
    }
}

/// Interrupt-safe home of the live animation state.
///
/// `new` is `const`, so the state can be placed in a `static` and reached
/// from both the main loop and an interrupt handler. The configuration given
/// to `new` is the one every controller on this state runs with.
pub struct SharedAnimation {
    state: Mutex<Cell<AnimationState>>,
    initial: AnimationState,
    config: AnimationConfig,
}

impl SharedAnimation {
    /// Creates shared state at the configuration's initial position.
    pub const fn new(config: &AnimationConfig) -> Self {
        let initial = AnimationState::initial(config);
        Self {
            state: Mutex::new(Cell::new(initial)),
            initial,
            config: *config,
        }
    }

    /// Returns a consistent copy of the current state.
    pub fn snapshot(&self) -> AnimationState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    /// Returns the state to its initial position. Idempotent.
    pub fn reset(&self) {
        critical_section::with(|cs| self.state.borrow(cs).set(self.initial));
    }

    /// Stores `next` only if the state still equals `seen`.
    ///
    /// Returns `false` when something else (a reset) changed the state since
    /// `seen` was read; the newer value is then left in place.
    pub fn compare_and_set(&self, seen: AnimationState, next: AnimationState) -> bool {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            if cell.get() == seen {
                cell.set(next);
                true
            } else {
                false
            }
        })
    }

    /// Configuration the animation runs with.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// The value [`reset`](Self::reset) restores.
    pub fn initial(&self) -> AnimationState {
        self.initial
    }

    /// Returns a handle suitable for firing resets from an interrupt handler.
    pub fn trigger(&self) -> ResetTrigger<'_> {
        ResetTrigger::new(self)
    }
}
