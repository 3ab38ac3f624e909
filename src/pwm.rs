//! Software PWM for a three-channel LED on plain GPIO lines.
//!
//! Provides [`SoftPwm`], which time-multiplexes three output pins to
//! approximate analog channel brightness, and the [`RgbLed`] trait the
//! animation controller renders through.

use core::marker::PhantomData;

use embedded_hal::digital::{OutputPin, PinState};

use crate::colors::RgbColor;
use crate::time::{TimeDuration, TimeInstant, TimeSource, wait_until};

/// Sub-ticks in one PWM frame. A channel value of 255 is on for all of them.
pub const SUB_TICKS_PER_FRAME: u8 = 255;

/// Frame rate used when no other is chosen.
///
/// A busy-loop PWM on an 8 MHz AVR spends about 3 µs per sub-tick, which is
/// roughly 1.3 kHz per frame; this default reproduces that refresh rate.
pub const DEFAULT_FRAME_RATE_HZ: u32 = 1_300;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware to let the animation controller
/// drive it.
pub trait RgbLed {
    /// Shows `color` for one PWM frame, blocking until the frame is done.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn render_frame(&mut self, color: RgbColor);
}

/// Electrical sense of the output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Line high lights the channel (common cathode).
    ActiveHigh,
    /// Line low lights the channel (common anode).
    ActiveLow,
}

impl Polarity {
    fn pin_state(self, active: bool) -> PinState {
        match self {
            Polarity::ActiveHigh => PinState::from(active),
            Polarity::ActiveLow => PinState::from(!active),
        }
    }
}

/// Sub-tick period giving `frame_rate_hz` full frames per second.
///
/// A rate of zero yields a zero period (free-running).
pub fn sub_tick_for_frame_rate<D: TimeDuration>(frame_rate_hz: u32) -> D {
    let ticks_per_second = u64::from(frame_rate_hz) * u64::from(SUB_TICKS_PER_FRAME);
    match 1_000_000u64.checked_div(ticks_per_second) {
        Some(micros) => D::from_micros(micros),
        None => D::ZERO,
    }
}

/// Software PWM driver for an RGB LED on three GPIO outputs.
///
/// Each frame walks [`SUB_TICKS_PER_FRAME`] sub-ticks. On sub-tick `t` a
/// channel is lit iff `t` is below the channel's value. Sub-tick boundaries
/// are deadlines against the time source measured from the frame start; a
/// zero sub-tick period runs the frame as fast as the pins can be written.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `R`, `G`, `B` - Output pin types for the red, green and blue lines
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct SoftPwm<'t, R, G, B, I, T>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
    I: TimeInstant,
    T: TimeSource<I>,
{
    red: R,
    green: G,
    blue: B,
    polarity: Polarity,
    sub_tick: I::Duration,
    time_source: &'t T,
    _instant: PhantomData<I>,
}

impl<'t, R, G, B, I, T> SoftPwm<'t, R, G, B, I, T>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
    I: TimeInstant,
    T: TimeSource<I>,
{
    /// Creates a driver and turns all three channels off.
    pub fn new(
        red: R,
        green: G,
        blue: B,
        polarity: Polarity,
        sub_tick: I::Duration,
        time_source: &'t T,
    ) -> Self {
        let mut pwm = Self {
            red,
            green,
            blue,
            polarity,
            sub_tick,
            time_source,
            _instant: PhantomData,
        };
        pwm.drive(false, false, false);
        pwm
    }

    /// Electrical sense the pins are driven with.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Length of one PWM sub-tick; zero when free-running.
    pub fn sub_tick(&self) -> I::Duration {
        self.sub_tick
    }

    /// Returns the red, green and blue pins.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn drive(&mut self, red: bool, green: bool, blue: bool) {
        let _ = self.red.set_state(self.polarity.pin_state(red));
        let _ = self.green.set_state(self.polarity.pin_state(green));
        let _ = self.blue.set_state(self.polarity.pin_state(blue));
    }
}

impl<'t, R, G, B, I, T> RgbLed for SoftPwm<'t, R, G, B, I, T>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
    I: TimeInstant,
    T: TimeSource<I>,
{
    fn render_frame(&mut self, color: RgbColor) {
        let period = self.sub_tick.as_micros();
        let start = self.time_source.now();

        for tick in 0..SUB_TICKS_PER_FRAME {
            self.drive(tick < color.red, tick < color.green, tick < color.blue);

            if period > 0 {
                wait_until(self.time_source, start, period * (u64::from(tick) + 1));
            }
        }
    }
}
