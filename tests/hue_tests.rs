//! Integration tests for hue interpolation

use hue_cycler::{HUE_MAX, interpolate_hue};

#[test]
fn step_zero_returns_start() {
    for (start, stop) in [(0, 0), (100, 1400), (1400, 100), (700, 20), (5, 900)] {
        assert_eq!(interpolate_hue(start, stop, 10, 0), start);
    }
}

#[test]
fn last_step_reaches_stop_when_division_is_exact() {
    for (start, stop) in [(0, 512), (100, 1400), (1400, 100), (900, 300), (1535, 1)] {
        assert_eq!(interpolate_hue(start, stop, 1, 1), stop);
        assert_eq!(interpolate_hue(start, stop, 7, 7), stop);
    }
}

#[test]
fn intermediate_steps_truncate() {
    // Short arc from 0 to 10 split in 3 steps: 10 * 2 / 3 == 6.
    assert_eq!(interpolate_hue(0, 10, 3, 2), 6);
    assert_eq!(interpolate_hue(0, 10, 3, 3), 10);
}

#[test]
fn short_arc_through_zero_moves_downward() {
    let values: Vec<u16> = (0..=10).map(|k| interpolate_hue(100, 1400, 10, k)).collect();

    assert_eq!(
        values,
        [100, 77, 53, 30, 6, 1518, 1495, 1471, 1448, 1424, 1400]
    );
    // Never passes through the long way round.
    assert!(values.iter().all(|&h| h <= 100 || h >= 1400));
}

#[test]
fn zero_distance_is_stable() {
    for hue in (0..HUE_MAX).step_by(97) {
        for k in 0..=5 {
            assert_eq!(interpolate_hue(hue, hue, 5, k), hue);
        }
    }
}

#[test]
fn results_stay_on_the_wheel() {
    for start in (0..HUE_MAX).step_by(61) {
        for stop in (0..HUE_MAX).step_by(89) {
            for k in 0..=4 {
                assert!(interpolate_hue(start, stop, 4, k) < HUE_MAX);
            }
        }
    }
}

#[test]
#[should_panic(expected = "at least one step")]
fn zero_total_steps_is_a_contract_violation() {
    interpolate_hue(10, 20, 0, 0);
}
