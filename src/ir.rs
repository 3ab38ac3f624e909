//! Infrared presence emitter.
//!
//! The sensor that feeds the reset trigger sees the device's own IR light
//! reflected off a nearby hand. The emitter only has to run in short carrier
//! bursts for that; it is independent of the colour animation.

use core::marker::PhantomData;

use crate::time::{TimeDuration, TimeInstant, TimeSource, wait_until};

/// Carrier frequency typical IR detector modules respond to.
pub const CARRIER_FREQUENCY_HZ: u32 = 38_000;

/// Default burst length: slightly more than six carrier periods, the minimum a
/// detector needs to register the signal.
pub const BURST_MICROS: u64 = 170;

/// Trait for abstracting the IR carrier generator (typically a timer output).
pub trait IrCarrier {
    /// Starts emitting the carrier.
    fn enable(&mut self);

    /// Stops emitting the carrier.
    fn disable(&mut self);
}

/// Emits fixed-length IR carrier bursts.
pub struct IrPulser<'t, C, I, T>
where
    C: IrCarrier,
    I: TimeInstant,
    T: TimeSource<I>,
{
    carrier: C,
    burst: I::Duration,
    time_source: &'t T,
    _instant: PhantomData<I>,
}

impl<'t, C, I, T> IrPulser<'t, C, I, T>
where
    C: IrCarrier,
    I: TimeInstant,
    T: TimeSource<I>,
{
    /// Creates a pulser with the default [`BURST_MICROS`] burst length.
    ///
    /// The carrier is switched off.
    pub fn new(carrier: C, time_source: &'t T) -> Self {
        Self::with_burst(carrier, I::Duration::from_micros(BURST_MICROS), time_source)
    }

    /// Creates a pulser with a custom burst length. The carrier is switched off.
    pub fn with_burst(mut carrier: C, burst: I::Duration, time_source: &'t T) -> Self {
        carrier.disable();
        Self {
            carrier,
            burst,
            time_source,
            _instant: PhantomData,
        }
    }

    /// Emits one burst, blocking for its duration.
    pub fn burst(&mut self) {
        let start = self.time_source.now();
        self.carrier.enable();
        wait_until(self.time_source, start, self.burst.as_micros());
        self.carrier.disable();
    }

    /// Length of each burst.
    pub fn burst_length(&self) -> I::Duration {
        self.burst
    }

    /// Returns the carrier.
    pub fn release(self) -> C {
        self.carrier
    }
}
