use embedded_hal::pwm::SetDutyCycle;
use hue_cycler::IrCarrier;

/// IR emitter LED on a PWM channel
///
/// The PWM slice must already run at the carrier frequency; enabling sets a
/// 50% duty cycle, disabling holds the output low.
pub struct PwmIrLed<C: SetDutyCycle> {
    channel: C,
}

impl<C: SetDutyCycle> PwmIrLed<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }
}

impl<C: SetDutyCycle> IrCarrier for PwmIrLed<C> {
    fn enable(&mut self) {
        let _ = self.channel.set_duty_cycle_percent(50);
    }

    fn disable(&mut self) {
        let _ = self.channel.set_duty_cycle_fully_off();
    }
}
