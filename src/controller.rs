//! Hue-cycling animation controller.
//!
//! [`AnimationController`] sweeps the hue wheel in fixed steps, renders each
//! hue for a level-dependent number of PWM frames, and ramps the level after
//! every full sweep. The live position lives in a [`SharedAnimation`] so a
//! reset can land from an interrupt at any time.

use crate::colors::{RgbColor, hsb_to_rgb};
use crate::config::AnimationConfig;
use crate::pwm::RgbLed;
use crate::state::{AnimationState, SharedAnimation};

/// What a single [`AnimationController::step`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// State that was rendered.
    pub state: AnimationState,
    /// Colour shown for the step.
    pub color: RgbColor,
    /// PWM frames rendered.
    pub frames: u16,
    /// The step finished a sweep of the hue wheel.
    pub sweep_completed: bool,
    /// A reset arrived while rendering; the step's advance was discarded.
    pub reset_observed: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StepReport {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StepReport {{ state: {}, rgb: ({}, {}, {}), frames: {}, sweep: {}, reset: {} }}",
            self.state,
            self.color.red,
            self.color.green,
            self.color.blue,
            self.frames,
            self.sweep_completed,
            self.reset_observed
        )
    }
}

/// Drives an RGB LED through the endless hue-cycling animation.
///
/// # Type Parameters
/// * `'a` - Lifetime of the shared animation state
/// * `L` - LED implementation type
pub struct AnimationController<'a, L: RgbLed> {
    led: L,
    shared: &'a SharedAnimation,
    config: AnimationConfig,
    sweeps_completed: u32,
}

impl<'a, L: RgbLed> AnimationController<'a, L> {
    /// Creates a controller that animates `shared` on `led`.
    ///
    /// The configuration is taken from `shared`, so the reset state and the
    /// stepping always agree.
    pub fn new(led: L, shared: &'a SharedAnimation) -> Self {
        Self {
            led,
            shared,
            config: *shared.config(),
            sweeps_completed: 0,
        }
    }

    /// Renders the current hue and advances by one hue step.
    ///
    /// The colour is computed once and shown for
    /// [`AnimationConfig::frames_per_step`] frames. The advance is committed
    /// only if no reset arrived in the meantime; otherwise the reset state is
    /// kept and rendered by the next step.
    pub fn step(&mut self) -> StepReport {
        let seen = self.shared.snapshot();
        let state = seen.clamped(&self.config);

        let color = hsb_to_rgb(state.hue, self.config.saturation(), self.config.brightness());
        let frames = self.config.frames_per_step(state.level);
        for _ in 0..frames {
            self.led.render_frame(color);
        }

        let (next, wrapped) = state.advanced(&self.config);
        let committed = self.shared.compare_and_set(seen, next);
        let sweep_completed = committed && wrapped;

        if sweep_completed {
            self.sweeps_completed = self.sweeps_completed.wrapping_add(1);
            #[cfg(feature = "defmt")]
            defmt::debug!("sweep complete, level now {}", next.level);
        }
        if !committed {
            #[cfg(feature = "defmt")]
            defmt::debug!("reset observed at hue {}", state.hue);
        }

        StepReport {
            state,
            color,
            frames,
            sweep_completed,
            reset_observed: !committed,
        }
    }

    /// Runs the animation forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Returns a reference to the LED.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Configuration the controller steps with.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Sweeps completed since construction. Resets do not clear this count.
    pub fn sweeps_completed(&self) -> u32 {
        self.sweeps_completed
    }
}
