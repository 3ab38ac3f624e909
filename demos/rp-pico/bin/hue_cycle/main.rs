#![no_std]
#![no_main]

use core::cell::RefCell;

use critical_section::Mutex;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, Sio, Timer,
    clocks::init_clocks_and_plls,
    gpio::{
        self,
        Interrupt::{EdgeHigh, EdgeLow},
    },
    pac::{self, interrupt},
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};

use hue_cycler::ir::CARRIER_FREQUENCY_HZ;
use hue_cycler::{
    AnimationConfig, AnimationController, DEFAULT_FRAME_RATE_HZ, IrCarrier, Polarity,
    SharedAnimation, SoftPwm, sub_tick_for_frame_rate,
};

use rp_pico_demo::ir_led::PwmIrLed;
use rp_pico_demo::time::{Duration, HardwareTimer};

/// IR detector output, pulled up; toggles when reflected IR appears or vanishes
type SensorPin = gpio::Pin<gpio::bank0::Gpio15, gpio::FunctionSioInput, gpio::PullUp>;

static ANIMATION: SharedAnimation = SharedAnimation::new(&AnimationConfig::DEFAULT);

/// Sensor pin, kept here so the interrupt handler can acknowledge its edges
static SENSOR: Mutex<RefCell<Option<SensorPin>>> = Mutex::new(RefCell::new(None));

/// Pin change on the IR detector: restart the animation
#[interrupt]
fn IO_IRQ_BANK0() {
    critical_section::with(|cs| {
        if let Some(sensor) = SENSOR.borrow_ref_mut(cs).as_mut() {
            sensor.clear_interrupt(EdgeLow);
            sensor.clear_interrupt(EdgeHigh);
        }
    });
    ANIMATION.trigger().fire();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Hue Cycle ===");

    let mut pac = pac::Peripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();
    let sys_hz = clocks.system_clock.freq().to_Hz();
    rprintln!("System clock configured: {} Hz", sys_hz);

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Common anode RGB LED: GPIO2 (R), GPIO3 (G), GPIO4 (B), lit when low
    let red = pins.gpio2.into_push_pull_output();
    let green = pins.gpio3.into_push_pull_output();
    let blue = pins.gpio4.into_push_pull_output();

    // IR LED on GPIO16 (PWM0 A), slice free-running at the carrier frequency
    let mut pwm_slices = rp_pico::hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS);
    pwm_slices.pwm0.set_div_int(1u8);
    pwm_slices.pwm0.set_top((sys_hz / CARRIER_FREQUENCY_HZ - 1) as u16);
    pwm_slices.pwm0.enable();
    let mut ir_channel = pwm_slices.pwm0.channel_a;
    ir_channel.output_to(pins.gpio16);

    // IR detector on GPIO15, interrupt on both edges
    let sensor: SensorPin = pins.gpio15.into_pull_up_input();
    sensor.set_interrupt_enabled(EdgeLow, true);
    sensor.set_interrupt_enabled(EdgeHigh, true);
    critical_section::with(|cs| SENSOR.borrow(cs).replace(Some(sensor)));

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let time_source = HardwareTimer::new(timer);

    let led = SoftPwm::new(
        red,
        green,
        blue,
        Polarity::ActiveLow,
        sub_tick_for_frame_rate::<Duration>(DEFAULT_FRAME_RATE_HZ),
        &time_source,
    );
    let mut controller = AnimationController::new(led, &ANIMATION);

    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    // Carrier runs for good; the detector sees it only when a hand reflects it
    let mut ir = PwmIrLed::new(ir_channel);
    ir.enable();

    rprintln!("=== Hardware Ready ===");

    loop {
        let report = controller.step();
        if report.sweep_completed {
            rprintln!("Sweep complete, level {}", ANIMATION.snapshot().level);
        }
        if report.reset_observed {
            rprintln!("Presence change, animation reset");
        }
    }
}
