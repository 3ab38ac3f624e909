//! Reset trigger for the presence sensor.
//!
//! Two delivery paths are provided: [`ResetTrigger::fire`] for edge
//! interrupt handlers, and [`PinChangeMonitor`] for platforms that poll the
//! sensor line instead.

use embedded_hal::digital::InputPin;

use crate::state::SharedAnimation;

/// Handle that returns the shared animation to its initial state.
///
/// Cheap to copy and safe to use from an interrupt handler. Firing does not
/// interrupt a frame that is already being rendered; the controller picks the
/// reset up when it commits its next step.
#[derive(Clone, Copy)]
pub struct ResetTrigger<'a> {
    shared: &'a SharedAnimation,
}

impl<'a> ResetTrigger<'a> {
    /// Creates a trigger for `shared`.
    pub fn new(shared: &'a SharedAnimation) -> Self {
        Self { shared }
    }

    /// Resets the animation. Repeated calls have the same effect as one.
    pub fn fire(&self) {
        self.shared.reset();
    }
}

/// Fires a reset whenever a polled input changes level.
///
/// Both rising and falling transitions count, matching a pin-change
/// interrupt. No debouncing is applied.
pub struct PinChangeMonitor<P: InputPin> {
    pin: P,
    last_high: Option<bool>,
}

impl<P: InputPin> PinChangeMonitor<P> {
    /// Wraps `pin`; no level is recorded until the first poll.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            last_high: None,
        }
    }

    /// Samples the pin and fires `trigger` on a level change.
    ///
    /// The first poll only records the level. Returns `Ok(true)` when a reset
    /// was fired.
    ///
    /// # Errors
    /// Returns the pin's error if it could not be read; the recorded level is
    /// left unchanged.
    pub fn poll(&mut self, trigger: &ResetTrigger<'_>) -> Result<bool, P::Error> {
        let high = self.pin.is_high()?;
        let changed = matches!(self.last_high, Some(last) if last != high);
        self.last_high = Some(high);

        if changed {
            trigger.fire();
        }
        Ok(changed)
    }

    /// Returns the wrapped pin.
    pub fn release(self) -> P {
        self.pin
    }
}
