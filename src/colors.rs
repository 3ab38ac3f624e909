//! Fixed-point colour space conversion.
//!
//! Converts hue/saturation/brightness into 8-bit RGB using integer arithmetic
//! only. Truncating division is part of the contract: the expected channel
//! values in the tests are derived from it.

use crate::hue::{HUE_MAX, SECTOR_WIDTH};
use palette::Srgb;

/// An 8-bit per channel RGB colour.
pub type RgbColor = Srgb<u8>;

// Sector boundary colours at full saturation and brightness, plus white and black.
pub const BLACK: RgbColor = Srgb::new(0, 0, 0);
pub const WHITE: RgbColor = Srgb::new(255, 255, 255);
pub const RED: RgbColor = Srgb::new(255, 0, 0);
pub const YELLOW: RgbColor = Srgb::new(255, 255, 0);
pub const GREEN: RgbColor = Srgb::new(0, 255, 0);
pub const CYAN: RgbColor = Srgb::new(0, 255, 255);
pub const BLUE: RgbColor = Srgb::new(0, 0, 255);
pub const MAGENTA: RgbColor = Srgb::new(255, 0, 255);

/// Upper bound for saturation and brightness percentages.
pub const PERCENT_MAX: u8 = 100;

/// Converts a hue/saturation/brightness triple to RGB.
///
/// `hue` is reduced modulo [`HUE_MAX`]. `saturation` and `brightness` are
/// percentages; values above 100 are treated as 100.
///
/// The wheel is walked in three segments of two sectors each. In the first
/// sector of a segment the leading channel is full and the next channel ramps
/// up; in the second sector the next channel is full and the leading channel
/// ramps down. The segment index selects which physical channel leads, so the
/// sector boundaries are red, yellow, green, cyan, blue and magenta.
///
/// Saturation blends each channel toward full white, then brightness scales
/// the result.
pub fn hsb_to_rgb(hue: u16, saturation: u8, brightness: u8) -> RgbColor {
    let hue = hue % HUE_MAX;
    let saturation = u16::from(saturation.min(PERCENT_MAX));
    let brightness = u16::from(brightness.min(PERCENT_MAX));

    let offset = hue % SECTOR_WIDTH;
    let ramp: [u16; 3] = if (hue / SECTOR_WIDTH) % 2 == 0 {
        [255, offset, 0]
    } else {
        [255 - offset, 255, 0]
    };
    let rotation = usize::from(hue / (SECTOR_WIDTH * 2));

    let mut channels = [0u8; 3];
    for (i, raw) in ramp.into_iter().enumerate() {
        let whitened = (255 * (100 - saturation)) / 100 + (raw * saturation) / 100;
        channels[(i + rotation) % 3] = ((whitened * brightness) / 100) as u8;
    }

    Srgb::new(channels[0], channels[1], channels[2])
}
