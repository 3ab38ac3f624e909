#![no_std]

pub mod ir_led;
pub mod time;
