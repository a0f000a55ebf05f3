// Host-side tests for the pure angle math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod platform {
    include!("../src/platform.rs");
}
mod tilt {
    include!("../src/tilt.rs");
}

use platform::{Layout, SensorReading};
use tilt::*;

#[test]
fn portrait_beta_folds_into_continuous_range() {
    assert_eq!(normalise_beta(0.0), 0.0); // face up
    assert_eq!(normalise_beta(90.0), 90.0); // upright
    assert_eq!(normalise_beta(179.0), 179.0); // almost face down
    assert_eq!(normalise_beta(-179.0), 181.0); // almost face down, past the wrap
    assert_eq!(normalise_beta(-90.0), 270.0); // upright, inverted
}

#[test]
fn portrait_beta_past_cutoff_reads_as_zero() {
    // -1 folds to 359, which is past the 270 cutoff
    assert_eq!(normalise_beta(-1.0), 0.0);
    assert_eq!(normalise_beta(-89.0), 0.0);
    // exactly 270 is kept
    assert_eq!(normalise_beta(-90.0), 270.0);
}

#[test]
fn clockwise_gamma_folds_negative_side() {
    assert_eq!(normalise_gamma_clockwise(-1.0), 179.0);
    assert_eq!(normalise_gamma_clockwise(-89.0), 91.0);
    assert_eq!(normalise_gamma_clockwise(89.0), 89.0);
    assert_eq!(normalise_gamma_clockwise(1.0), 1.0);
}

#[test]
fn anticlockwise_gamma_mirrors_clockwise() {
    assert_eq!(normalise_gamma_anticlockwise(1.0), 179.0);
    assert_eq!(normalise_gamma_anticlockwise(89.0), 91.0);
    assert_eq!(normalise_gamma_anticlockwise(-89.0), 89.0);
    assert_eq!(normalise_gamma_anticlockwise(-1.0), 1.0);
    assert_eq!(normalise_gamma_anticlockwise(0.0), 0.0);
}

#[test]
fn normalised_angle_picks_source_by_layout() {
    let r = SensorReading {
        alpha: Some(10.0),
        beta: Some(-90.0),
        gamma: Some(-30.0),
    };
    assert_eq!(normalised_angle(Layout::Portrait, &r), Some(270.0));
    assert_eq!(normalised_angle(Layout::LandscapeClockwise, &r), Some(150.0));
    assert_eq!(normalised_angle(Layout::LandscapeAntiClockwise, &r), Some(30.0));
}

#[test]
fn normalised_angle_missing_field_is_none() {
    let no_beta = SensorReading {
        alpha: Some(0.0),
        beta: None,
        gamma: Some(20.0),
    };
    assert_eq!(normalised_angle(Layout::Portrait, &no_beta), None);
    assert_eq!(normalised_angle(Layout::LandscapeClockwise, &no_beta), Some(20.0));

    let no_gamma = SensorReading {
        gamma: None,
        ..no_beta
    };
    assert_eq!(normalised_angle(Layout::LandscapeAntiClockwise, &no_gamma), None);
}

#[test]
fn max_angle_depends_on_baseline_band() {
    assert_eq!(max_angle(45.0, Layout::Portrait), 140.0);
    assert_eq!(max_angle(90.0, Layout::Portrait), 140.0);
    assert_eq!(max_angle(120.0, Layout::Portrait), 210.0);
    assert_eq!(max_angle(180.0, Layout::Portrait), 270.0);
    assert_eq!(max_angle(120.0, Layout::LandscapeClockwise), 180.0);
    assert_eq!(max_angle(120.0, Layout::LandscapeAntiClockwise), 180.0);
    assert_eq!(max_angle(200.0, Layout::Portrait), 250.0);
    assert_eq!(max_angle(45.0, Layout::LandscapeClockwise), 140.0);
}

#[test]
fn portrait_clamps_to_both_ends() {
    assert_eq!(clamp_angle(300.0, 100.0, 190.0, Layout::Portrait, 0.0, 0.0), 190.0);
    assert_eq!(clamp_angle(50.0, 100.0, 190.0, Layout::Portrait, 0.0, 0.0), 100.0);
    assert_eq!(clamp_angle(150.0, 100.0, 190.0, Layout::Portrait, 0.0, 0.0), 150.0);
}

#[test]
fn landscape_overshoot_snaps_back_when_gamma_keeps_turning() {
    // clockwise, gamma > 0: rolled past the wrap, back to the baseline
    assert_eq!(
        clamp_angle(150.0, 45.0, 140.0, Layout::LandscapeClockwise, 10.0, 30.0),
        45.0
    );
    // clockwise, gamma < 0: plain overshoot, hold at the top
    assert_eq!(
        clamp_angle(150.0, 45.0, 140.0, Layout::LandscapeClockwise, 10.0, -30.0),
        140.0
    );
    // anti-clockwise uses the mirrored sign
    assert_eq!(
        clamp_angle(150.0, 45.0, 140.0, Layout::LandscapeAntiClockwise, 10.0, -30.0),
        45.0
    );
    assert_eq!(
        clamp_angle(150.0, 45.0, 140.0, Layout::LandscapeAntiClockwise, 10.0, 30.0),
        140.0
    );
}

#[test]
fn landscape_below_baseline_four_way_split() {
    let lc = Layout::LandscapeClockwise;
    // above horizon, started above horizon, gamma still turning: top
    assert_eq!(clamp_angle(110.0, 120.0, 180.0, lc, 100.0, 10.0), 180.0);
    // above horizon, started above horizon, reversed: bottom
    assert_eq!(clamp_angle(110.0, 120.0, 180.0, lc, 100.0, -10.0), 120.0);
    // above horizon, started below horizon: top
    assert_eq!(clamp_angle(30.0, 45.0, 140.0, lc, -120.0, -10.0), 140.0);
    // below horizon: bottom
    assert_eq!(clamp_angle(30.0, 45.0, 140.0, lc, 30.0, 10.0), 45.0);
}

#[test]
fn landscape_below_baseline_anticlockwise_flips_gamma_sign() {
    let la = Layout::LandscapeAntiClockwise;
    // above horizon, started above horizon, gamma still turning (negative): top
    assert_eq!(clamp_angle(110.0, 120.0, 180.0, la, 100.0, -10.0), 180.0);
    // same position with positive gamma is a reversal: bottom
    assert_eq!(clamp_angle(110.0, 120.0, 180.0, la, 100.0, 10.0), 120.0);
    // above horizon, started below horizon: top regardless of gamma
    assert_eq!(clamp_angle(30.0, 45.0, 140.0, la, -120.0, 10.0), 140.0);
    // below horizon: bottom
    assert_eq!(clamp_angle(30.0, 45.0, 140.0, la, 30.0, -10.0), 45.0);
}

#[test]
fn map_range_is_inverted_onto_page() {
    assert_eq!(map_range(100.0, 100.0, 190.0, 2000.0, 0.0), 2000.0);
    assert_eq!(map_range(190.0, 100.0, 190.0, 2000.0, 0.0), 0.0);
    assert_eq!(map_range(145.0, 100.0, 190.0, 2000.0, 0.0), 1000.0);
}

#[test]
fn map_range_zero_width_domain_gives_lower_bound() {
    let v = map_range(250.0, 250.0, 250.0, 2000.0, 0.0);
    assert!(v.is_finite());
    assert_eq!(v, 2000.0);
}

#[test]
fn jitter_smoothing_applies_tenth_of_large_moves() {
    let down = smooth_jitter(200.0, Some(100.0), Layout::Portrait);
    assert!((down - 110.0).abs() < 1e-9, "got {down}");
    let up = smooth_jitter(0.0, Some(2000.0), Layout::Portrait);
    assert!((up - 1800.0).abs() < 1e-9, "got {up}");
}

#[test]
fn jitter_smoothing_leaves_small_moves_and_landscape_alone() {
    assert_eq!(smooth_jitter(103.0, Some(100.0), Layout::Portrait), 103.0);
    assert_eq!(smooth_jitter(105.0, Some(100.0), Layout::Portrait), 105.0);
    assert_eq!(smooth_jitter(95.0, Some(100.0), Layout::Portrait), 95.0);
    assert_eq!(smooth_jitter(200.0, Some(100.0), Layout::LandscapeClockwise), 200.0);
    assert_eq!(smooth_jitter(200.0, None, Layout::Portrait), 200.0);
}

#[test]
fn round_half_up_matches_page_rounding() {
    assert_eq!(round_half_up(2.5), 3);
    assert_eq!(round_half_up(-2.5), -2);
    assert_eq!(round_half_up(1.4), 1);
    assert_eq!(round_half_up(-1.6), -2);
}
