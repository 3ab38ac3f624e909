#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`hsb_to_rgb`**: Fixed-point hue/saturation/brightness to 8-bit RGB conversion
//! - **`interpolate_hue`**: Shortest-arc interpolation around the hue wheel
//! - **`RgbLed`**: Trait to implement for your LED hardware
//! - **`SoftPwm`**: `RgbLed` implementation that PWMs three plain GPIO outputs in software
//! - **`AnimationConfig`**: Hue step, colour and intensity ramp parameters
//! - **`SharedAnimation`**: Interrupt-safe home of the current hue and intensity level
//! - **`ResetTrigger`**: Handle that restarts the animation, callable from an interrupt
//! - **`AnimationController`**: Sequences colour conversion and PWM frames forever
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`IrPulser`**: Short IR carrier bursts for the presence sensor
//!
//! Colours are `Srgb<u8>` and all colour math is integer-only.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod config;
pub mod controller;
pub mod hue;
pub mod ir;
pub mod pwm;
pub mod state;
pub mod time;
pub mod trigger;

pub use colors::{
    BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, RgbColor, WHITE, YELLOW, hsb_to_rgb,
};
pub use config::{AnimationConfig, ConfigBuilder, ConfigError};
pub use controller::{AnimationController, StepReport};
pub use hue::{HUE_MAX, SECTOR_WIDTH, interpolate_hue};
pub use ir::{IrCarrier, IrPulser};
pub use pwm::{
    DEFAULT_FRAME_RATE_HZ, Polarity, RgbLed, SUB_TICKS_PER_FRAME, SoftPwm, sub_tick_for_frame_rate,
};
pub use state::{AnimationState, SharedAnimation};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use trigger::{PinChangeMonitor, ResetTrigger};
