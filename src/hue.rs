//! Circular hue arithmetic.
//!
//! Hues live on a wheel of [`HUE_MAX`] units: six sectors of [`SECTOR_WIDTH`]
//! units each. All arithmetic on the wheel is modular.

/// Width of one colour-wheel sector.
pub const SECTOR_WIDTH: u16 = 1 << 8;

/// Number of distinct hue values; hues are in `0..HUE_MAX`.
pub const HUE_MAX: u16 = SECTOR_WIDTH * 6;

/// Calculates an intermediate hue on the shortest arc from `start` to `stop`.
///
/// Returns the hue `current_step / total_steps` of the way along the arc.
/// When both arcs have the same length (exactly half the wheel) the hue
/// travels in the direction the raw values suggest, i.e. forward when
/// `start <= stop`.
///
/// Progress uses truncating integer division, so intermediate hues for step
/// counts that do not divide the arc length lag by up to one unit.
///
/// # Panics
/// Panics if `total_steps` is zero.
pub fn interpolate_hue(start: u16, stop: u16, total_steps: u16, current_step: u16) -> u16 {
    assert!(total_steps > 0, "interpolate_hue requires at least one step");

    let hue_max = i32::from(HUE_MAX);
    let start = i32::from(start % HUE_MAX);
    let stop = i32::from(stop % HUE_MAX);
    let steps = i32::from(total_steps);
    let current = i32::from(current_step);

    let mut dist = (stop - start).abs();
    let forward = if dist <= hue_max / 2 {
        start <= stop
    } else {
        // Shorter to go the other way, through the 0 boundary.
        dist = hue_max - dist;
        start > stop
    };

    let offset = dist * current / steps;
    let result = if forward { start + offset } else { start - offset };

    result.rem_euclid(hue_max) as u16
}
